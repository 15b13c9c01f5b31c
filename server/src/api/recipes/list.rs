use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use moodmeal_core::{Difficulty, Recipe, RecipeFilter};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListRecipesParams {
    /// Recipe mood-tag list must contain this tag.
    pub mood: Option<String>,
    /// Cuisine must equal this value.
    pub cuisine: Option<String>,
    /// Comma-separated dietary tags; any overlap matches.
    pub dietary_tags: Option<String>,
    /// One of: easy, medium, hard.
    pub difficulty: Option<String>,
    /// Cook time must be at most this many minutes.
    pub max_cook_time: Option<u32>,
    /// Category must equal this value (breakfast, lunch, dinner, snack, dessert).
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Active recipes matching every supplied filter", body = [Recipe]),
        (status = 400, description = "Invalid filter parameters", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let difficulty = match params.difficulty.as_deref() {
        None => None,
        Some(raw) => match Difficulty::from_str(raw) {
            Some(difficulty) => Some(difficulty),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Invalid filter parameters".to_string(),
                    }),
                )
                    .into_response()
            }
        },
    };

    let dietary_tags = params.dietary_tags.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    let filter = RecipeFilter {
        mood: params.mood,
        cuisine: params.cuisine,
        dietary_tags,
        difficulty,
        max_cook_time: params.max_cook_time,
        category: params.category,
    };

    let recipes = state.storage.recipes(Some(&filter)).await;
    (StatusCode::OK, Json(recipes)).into_response()
}
