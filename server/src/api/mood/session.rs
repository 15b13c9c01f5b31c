use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use moodmeal_core::MoodAnalysis;

#[utoipa::path(
    get,
    path = "/api/mood/session/{session_id}",
    tag = "mood",
    params(
        ("session_id" = String, Path, description = "Session identifier")
    ),
    responses(
        (status = 200, description = "All analyses recorded for the session", body = [MoodAnalysis])
    )
)]
pub async fn session_analyses(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let analyses = state.storage.mood_analyses_by_session(&session_id).await;
    (StatusCode::OK, Json(analyses)).into_response()
}
