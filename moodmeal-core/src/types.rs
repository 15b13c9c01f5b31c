//! Domain types shared between the store, the classifier and the HTTP layer.
//!
//! All types serialize as camelCase to match the public JSON contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// How a mood analysis was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DetectionType {
    Image,
    Text,
}

/// Per-serving nutrition estimates. All fields optional and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// A stored recipe. Immutable once created; soft-deletion is modeled by
/// clearing `is_active` (no handler currently does).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Cook time in minutes.
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Ordered, never empty. The first entry is the primary mood tag.
    pub mood_tags: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub is_active: bool,
}

impl Recipe {
    /// The primary mood tag, used as the default recommendation key.
    pub fn primary_mood_tag(&self) -> Option<&str> {
        self.mood_tags.first().map(String::as_str)
    }
}

/// Input for creating a recipe. Identifier, rating, review count and the
/// active flag are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    pub mood_tags: Vec<String>,
}

/// One recorded mood analysis. Created exactly once per analysis request,
/// never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub id: Uuid,
    pub session_id: Option<String>,
    pub detection_type: DetectionType,
    /// Opaque snapshot of the input: a placeholder for images, the raw
    /// text for text analyses.
    #[schema(value_type = Option<Object>)]
    pub input_data: Option<Value>,
    pub detected_mood: String,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    /// Full classifier response, kept for audit only.
    #[schema(value_type = Option<Object>)]
    pub ai_response: Option<Value>,
    pub recommended_recipes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a mood analysis.
#[derive(Debug, Clone)]
pub struct NewMoodAnalysis {
    pub session_id: Option<String>,
    pub detection_type: DetectionType,
    pub input_data: Option<Value>,
    pub detected_mood: String,
    pub confidence: f64,
    pub ai_response: Option<Value>,
    pub recommended_recipes: Vec<Uuid>,
}

/// Per-user (or per-session) preference sets. Mutated via partial merge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    pub favorite_recipes: Vec<Uuid>,
}

/// Input for creating a preference record.
#[derive(Debug, Clone, Default)]
pub struct NewUserPreferences {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    pub favorite_recipes: Vec<Uuid>,
}

/// Partial update for a preference record. `None` fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct UserPreferencesUpdate {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
    pub preferred_cuisines: Option<Vec<String>>,
    pub disliked_ingredients: Option<Vec<String>>,
    pub favorite_recipes: Option<Vec<Uuid>>,
}

/// Filter for recipe listing. Supplied fields are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Recipe mood-tag list must contain this tag.
    pub mood: Option<String>,
    /// Cuisine must equal this value.
    pub cuisine: Option<String>,
    /// Recipe dietary tags must intersect this set.
    pub dietary_tags: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    /// Cook time must be at most this many minutes.
    pub max_cook_time: Option<u32>,
    pub category: Option<String>,
}

impl RecipeFilter {
    /// True when the recipe satisfies every supplied field.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(mood) = &self.mood {
            if !recipe.mood_tags.iter().any(|t| t == mood) {
                return false;
            }
        }
        if let Some(cuisine) = &self.cuisine {
            if recipe.cuisine.as_deref() != Some(cuisine.as_str()) {
                return false;
            }
        }
        if let Some(tags) = &self.dietary_tags {
            if !tags.is_empty() && !tags.iter().any(|t| recipe.dietary_tags.contains(t)) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }
        if let Some(max) = self.max_cook_time {
            if recipe.cook_time > max {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if recipe.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        true
    }
}
