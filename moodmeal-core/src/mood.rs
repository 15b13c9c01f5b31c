//! Emotion to mood-tag translation.
//!
//! Detected emotions are joined to recipes through descriptive mood tags.
//! The table is fixed; the first tag of each entry is the primary key used
//! when querying the store for recommendations.

/// Tags returned for an emotion the table does not cover.
pub const FALLBACK_TAGS: &[&str] = &["balanced", "healthy"];

/// Translate a detected emotion label into an ordered list of mood tags.
///
/// Unknown labels fall back to [`FALLBACK_TAGS`]. The result is never empty.
pub fn mood_tags_for_emotion(emotion: &str) -> &'static [&'static str] {
    match emotion {
        "happy" => &["happy", "energetic", "celebratory"],
        "sad" => &["comfort", "warm", "soothing"],
        "angry" => &["cooling", "calm", "soothing"],
        "stressed" => &["comfort", "calm", "stress-relief"],
        "energetic" => &["energetic", "fresh", "power"],
        "tired" => &["comfort", "easy", "nourishing"],
        "excited" => &["happy", "celebratory", "fresh"],
        "calm" => &["calm", "peaceful", "light"],
        "neutral" => &["balanced", "fresh", "healthy"],
        "surprised" => &["exciting", "unique", "adventurous"],
        "fear" => &["comfort", "familiar", "warm"],
        "disgust" => &["clean", "fresh", "light"],
        _ => FALLBACK_TAGS,
    }
}
