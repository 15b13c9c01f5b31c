use crate::api::mood::{generate_session_id, recommend_and_record, AnalysisResponse};
use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use moodmeal_core::DetectionType;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysisRequest {
    /// Free-text description of how the user feels.
    pub text: String,
    /// Optional session identifier; generated when absent.
    pub session_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/mood/analyze-text",
    tag = "mood",
    request_body = TextAnalysisRequest,
    responses(
        (status = 200, description = "Mood detected and recipes recommended", body = AnalysisResponse),
        (status = 400, description = "Empty or missing text", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<TextAnalysisRequest>,
) -> impl IntoResponse {
    if request.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Text cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let session_id = request
        .session_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(generate_session_id);

    let detection = state.classifier.classify_text(&request.text).await;

    let response = recommend_and_record(
        &state,
        session_id,
        DetectionType::Text,
        Some(json!({ "text": request.text })),
        detection,
    )
    .await;

    (StatusCode::OK, Json(response)).into_response()
}
