//! Mood classifier abstraction.
//!
//! Two interchangeable implementations sit behind one trait: a hosted
//! inference client used when a Hugging Face credential is configured, and a
//! local heuristic used without one. The choice is made once at startup by
//! [`classifier_from_env`].

mod heuristic;
mod huggingface;

pub use heuristic::HeuristicClassifier;
pub use huggingface::HuggingFaceClassifier;

use async_trait::async_trait;
use serde_json::Value;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default base URL for the hosted inference API.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default timeout for outbound inference calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error type for inference calls. These never escape the adapter: every
/// failure degrades to heuristic output.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("inference request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("inference API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("failed to parse inference response: {0}")]
    ParseError(String),
}

/// Result of classifying one input.
#[derive(Debug, Clone)]
pub struct MoodDetection {
    /// Detected emotion label, e.g. "happy" or "stressed".
    pub emotion: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Raw upstream response, kept for audit. `None` for heuristic results.
    pub raw_response: Option<Value>,
}

/// Trait for mood classifiers.
///
/// Implementations must absorb upstream failures internally (falling back to
/// heuristic output), so classification itself cannot fail. There are no
/// retries; each call stands alone.
#[async_trait]
pub trait MoodClassifier: Send + Sync + fmt::Debug {
    /// Detect the dominant emotion in a selfie.
    async fn classify_image(&self, image: &[u8]) -> MoodDetection;

    /// Detect the dominant emotion in a free-text mood description.
    async fn classify_text(&self, text: &str) -> MoodDetection;

    /// Classifier name for logging (e.g. "huggingface", "heuristic").
    fn name(&self) -> &'static str;
}

/// Configuration for the hosted inference client.
#[derive(Debug, Clone)]
pub struct HfConfig {
    /// Bearer credential for the inference API.
    pub api_key: String,
    /// Base URL, model name appended per request.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HfConfig {
    /// Load configuration from environment variables. Returns `None` when no
    /// credential is set, which selects the heuristic classifier.
    ///
    /// - `HUGGINGFACE_API_KEY` or `HF_TOKEN`: bearer credential
    /// - `MOODMEAL_HF_BASE_URL`: API base URL (default: hosted inference API)
    /// - `MOODMEAL_HF_TIMEOUT_SECS`: request timeout (default: 10)
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("HUGGINGFACE_API_KEY")
            .or_else(|_| env::var("HF_TOKEN"))
            .ok()
            .filter(|key| !key.is_empty())?;

        let base_url =
            env::var("MOODMEAL_HF_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("MOODMEAL_HF_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Select a classifier from the environment: hosted inference when a
/// credential is configured, local heuristics otherwise. Running without a
/// credential is a supported degraded mode, not an error.
pub fn classifier_from_env() -> Arc<dyn MoodClassifier> {
    match HfConfig::from_env() {
        Some(config) => Arc::new(HuggingFaceClassifier::new(config)),
        None => {
            tracing::warn!(
                "no Hugging Face API token found, mood detection will use heuristic results"
            );
            Arc::new(HeuristicClassifier)
        }
    }
}
