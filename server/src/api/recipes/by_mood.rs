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
    path = "/api/recipes/mood/{mood}",
    tag = "recipes",
    params(
        ("mood" = String, Path, description = "Mood tag, e.g. \"comfort\" or \"energetic\"")
    ),
    responses(
        (status = 200, description = "Active recipes carrying the mood tag; empty is valid", body = [Recipe])
    )
)]
pub async fn recipes_by_mood(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> impl IntoResponse {
    let recipes = state.storage.recipes_by_mood(&mood).await;
    (StatusCode::OK, Json(recipes)).into_response()
}
