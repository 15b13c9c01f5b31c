use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use moodmeal_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes/search/{query}",
    tag = "recipes",
    params(
        ("query" = String, Path, description = "Substring matched against title, description, ingredients and mood tags")
    ),
    responses(
        (status = 200, description = "Matching recipes; empty when nothing matches", body = [Recipe]),
        (status = 400, description = "Blank query", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> impl IntoResponse {
    if query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Search query is required".to_string(),
            }),
        )
            .into_response();
    }

    let recipes = state.storage.search_recipes(&query).await;
    (StatusCode::OK, Json(recipes)).into_response()
}
