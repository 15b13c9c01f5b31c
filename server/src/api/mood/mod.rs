pub mod analyze_image;
pub mod analyze_text;
pub mod session;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use moodmeal_core::{mood_tags_for_emotion, DetectionType, MoodDetection, NewMoodAnalysis, Recipe};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Cap on recipes returned with one analysis.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Returns the router for mood analysis endpoints (mounted at /api/mood)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze-image", post(analyze_image::analyze_image))
        .route("/analyze-text", post(analyze_text::analyze_text))
        .route("/session/{session_id}", get(session::session_analyses))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_image::analyze_image,
        analyze_text::analyze_text,
        session::session_analyses,
    ),
    components(schemas(
        AnalysisResponse,
        analyze_image::ImageAnalysisRequest,
        analyze_text::TextAnalysisRequest,
    ))
)]
pub struct ApiDoc;

/// Response body shared by both analysis endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub session_id: String,
    pub detected_mood: String,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    /// Ordered mood tags for the detected emotion; the first is the
    /// recommendation key.
    pub mood_tags: Vec<String>,
    /// At most [`MAX_RECOMMENDATIONS`] recipes. Empty is a valid result.
    pub recommended_recipes: Vec<Recipe>,
}

/// Opaque session identifier for grouping analyses from one anonymous
/// browsing session.
pub(crate) fn generate_session_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!(
        "session_{}_{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}

/// Shared tail of both analysis pipelines: map the detected emotion to mood
/// tags, fetch recommendations for the primary tag, record the analysis and
/// build the response.
pub(crate) async fn recommend_and_record(
    state: &AppState,
    session_id: String,
    detection_type: DetectionType,
    input_data: Option<Value>,
    detection: MoodDetection,
) -> AnalysisResponse {
    let mood_tags = mood_tags_for_emotion(&detection.emotion);
    // The mapping table never returns an empty list.
    let mut recommended = state.storage.recipes_by_mood(mood_tags[0]).await;
    recommended.truncate(MAX_RECOMMENDATIONS);

    let analysis = state
        .storage
        .create_mood_analysis(NewMoodAnalysis {
            session_id: Some(session_id.clone()),
            detection_type,
            input_data,
            detected_mood: detection.emotion.clone(),
            confidence: detection.confidence,
            ai_response: detection.raw_response,
            recommended_recipes: recommended.iter().map(|r| r.id).collect(),
        })
        .await;

    AnalysisResponse {
        analysis_id: analysis.id,
        session_id,
        detected_mood: detection.emotion,
        confidence: detection.confidence,
        mood_tags: mood_tags.iter().map(|t| t.to_string()).collect(),
        recommended_recipes: recommended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use moodmeal_core::{HeuristicClassifier, MemStorage, Storage};
    use std::sync::Arc;
    use tower::util::ServiceExt; // for `oneshot`

    const BOUNDARY: &str = "test-boundary";

    fn test_app() -> (Arc<MemStorage>, Router) {
        let storage = Arc::new(MemStorage::seeded());
        let state = AppState {
            storage: storage.clone(),
            classifier: Arc::new(HeuristicClassifier),
        };
        let app = Router::new()
            .nest("/api/mood", router())
            .with_state(state);
        (storage, app)
    }

    async fn read_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, content_type, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            if content_type.is_some() {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"selfie.png\"\r\n"
                    )
                    .as_bytes(),
                );
            } else {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
                );
            }
            if let Some(ct) = content_type {
                body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn analyze_text_runs_the_full_pipeline() {
        let (storage, app) = test_app();

        let request = json_request(
            "/api/mood/analyze-text",
            serde_json::json!({
                "text": "I'm feeling stressed after work",
                "sessionId": "session_test"
            }),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response.into_body()).await;
        assert_eq!(body["detectedMood"], "stressed");
        assert_eq!(body["sessionId"], "session_test");
        let confidence = body["confidence"].as_f64().unwrap();
        assert!((0.8..0.95).contains(&confidence));
        assert_eq!(
            body["moodTags"],
            serde_json::json!(["comfort", "calm", "stress-relief"])
        );

        let recommended = body["recommendedRecipes"].as_array().unwrap();
        assert!(recommended.len() <= MAX_RECOMMENDATIONS);
        for recipe in recommended {
            assert!(recipe["moodTags"]
                .as_array()
                .unwrap()
                .iter()
                .any(|t| t == "comfort"));
        }

        let recorded = storage.mood_analyses_by_session("session_test").await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].detected_mood, "stressed");
        assert!(recorded[0].recommended_recipes.len() <= MAX_RECOMMENDATIONS);
    }

    #[tokio::test]
    async fn analyze_text_generates_session_id_when_missing() {
        let (_storage, app) = test_app();

        let request = json_request(
            "/api/mood/analyze-text",
            serde_json::json!({"text": "full of energy today"}),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response.into_body()).await;
        assert!(body["sessionId"].as_str().unwrap().starts_with("session_"));
        assert_eq!(body["detectedMood"], "energetic");
    }

    #[tokio::test]
    async fn analyze_text_rejects_blank_text() {
        let (storage, app) = test_app();

        let request = json_request(
            "/api/mood/analyze-text",
            serde_json::json!({"text": "   ", "sessionId": "session_blank"}),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Nothing was classified or recorded.
        assert!(storage.mood_analyses_by_session("session_blank").await.is_empty());
    }

    #[tokio::test]
    async fn analyze_image_without_file_is_rejected() {
        let (storage, app) = test_app();

        let request = multipart_request(
            "/api/mood/analyze-image",
            &[("sessionId", None, b"session_nofile")],
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response.into_body()).await;
        assert_eq!(body["error"], "No image file provided");
        assert!(storage.mood_analyses_by_session("session_nofile").await.is_empty());
    }

    #[tokio::test]
    async fn analyze_image_rejects_non_image_mime() {
        let (_storage, app) = test_app();

        let request = multipart_request(
            "/api/mood/analyze-image",
            &[("image", Some("text/plain"), b"hello")],
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn analyze_image_classifies_and_records() {
        let (storage, app) = test_app();

        let request = multipart_request(
            "/api/mood/analyze-image",
            &[
                ("image", Some("image/png"), PNG_MAGIC),
                ("sessionId", None, b"session_img"),
            ],
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response.into_body()).await;
        assert!(body["detectedMood"].as_str().is_some());
        assert!(!body["moodTags"].as_array().unwrap().is_empty());
        assert!(body["recommendedRecipes"].as_array().unwrap().len() <= MAX_RECOMMENDATIONS);

        let recorded = storage.mood_analyses_by_session("session_img").await;
        assert_eq!(recorded.len(), 1);
    }

    #[tokio::test]
    async fn session_endpoint_lists_recorded_analyses() {
        let (_storage, app) = test_app();

        let request = json_request(
            "/api/mood/analyze-text",
            serde_json::json!({"text": "just a day", "sessionId": "session_history"}),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .method("GET")
            .uri("/api/mood/session/session_history")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response.into_body()).await;
        let analyses = body.as_array().unwrap();
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0]["detectionType"], "text");
        assert_eq!(analyses[0]["sessionId"], "session_history");
    }

    #[test]
    fn generated_session_ids_are_unique() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert!(a.starts_with("session_"));
        assert_ne!(a, b);
    }
}
