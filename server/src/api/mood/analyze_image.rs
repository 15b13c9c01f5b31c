use crate::api::mood::{generate_session_id, recommend_and_record, AnalysisResponse};
use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use moodmeal_core::{validate_image, DetectionType, MAX_IMAGE_BYTES};
use serde_json::json;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageAnalysisRequest {
    /// Selfie to analyze (image/*, at most 5MB).
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/mood/analyze-image",
    tag = "mood",
    request_body(content_type = "multipart/form-data", content = ImageAnalysisRequest),
    responses(
        (status = 200, description = "Mood detected and recipes recommended", body = AnalysisResponse),
        (status = 400, description = "Missing or invalid image", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut image: Option<axum::body::Bytes> = None;
    let mut session_id: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                let error = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    format!("Image too large. Maximum size is {} bytes", MAX_IMAGE_BYTES)
                } else {
                    format!("Failed to read multipart data: {}", e.body_text())
                };
                return (e.status(), Json(ErrorResponse { error })).into_response();
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let is_image = field
                    .content_type()
                    .map(|ct| ct.starts_with("image/"))
                    .unwrap_or(false);
                if !is_image {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: "Only image files are allowed".to_string(),
                        }),
                    )
                        .into_response();
                }
                match field.bytes().await {
                    Ok(bytes) => image = Some(bytes),
                    Err(e) => {
                        tracing::warn!("Field read error: {}", e);
                        let error = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                            format!("Image too large. Maximum size is {} bytes", MAX_IMAGE_BYTES)
                        } else {
                            format!("Failed to read file data: {}", e.body_text())
                        };
                        return (e.status(), Json(ErrorResponse { error })).into_response();
                    }
                }
            }
            Some("sessionId") => {
                if let Ok(text) = field.text().await {
                    if !text.is_empty() {
                        session_id = Some(text);
                    }
                }
            }
            _ => {}
        }
    }

    let Some(data) = image else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No image file provided".to_string(),
            }),
        )
            .into_response();
    };

    if data.len() > MAX_IMAGE_BYTES {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Image too large. Maximum size is {} bytes", MAX_IMAGE_BYTES),
            }),
        )
            .into_response();
    }

    if let Err(error) = validate_image(&data) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let session_id = session_id.unwrap_or_else(generate_session_id);
    let detection = state.classifier.classify_image(&data).await;

    // The raw image is not retained; only a placeholder goes in the record.
    let response = recommend_and_record(
        &state,
        session_id,
        DetectionType::Image,
        Some(json!({ "imagePath": "uploaded_image" })),
        detection,
    )
    .await;

    (StatusCode::OK, Json(response)).into_response()
}
