//! Storage abstraction.
//!
//! Handlers only see the [`Storage`] trait so a persistent backing store can
//! be substituted later without touching them. The in-memory implementation
//! is the only one today.

mod memory;
mod seed;

pub use memory::MemStorage;
pub use seed::sample_recipes;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::types::{
    MoodAnalysis, NewMoodAnalysis, NewRecipe, NewUserPreferences, Recipe, RecipeFilter,
    UserPreferences, UserPreferencesUpdate,
};

#[derive(Debug, Error)]
pub enum StorageError {
    /// Every recipe needs at least one mood tag; the first one is used as
    /// the recommendation key.
    #[error("recipe must have at least one mood tag")]
    EmptyMoodTags,
}

/// Repository capability set. "Not found" is a valid outcome for the
/// single-record lookups, expressed as `None`.
#[async_trait]
pub trait Storage: Send + Sync {
    // Recipes
    async fn recipe(&self, id: Uuid) -> Option<Recipe>;
    /// All active recipes, optionally narrowed by a filter whose supplied
    /// fields are ANDed.
    async fn recipes(&self, filter: Option<&RecipeFilter>) -> Vec<Recipe>;
    /// Active recipes whose mood-tag list contains `mood`, in insertion
    /// order. Not relevance-ranked.
    async fn recipes_by_mood(&self, mood: &str) -> Vec<Recipe>;
    /// Case-insensitive substring match across title, description,
    /// ingredients and mood tags. Active recipes only.
    async fn search_recipes(&self, query: &str) -> Vec<Recipe>;
    /// Store a new recipe with a fresh id, rating 0, review count 0 and the
    /// active flag set.
    async fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, StorageError>;

    // Mood analyses
    async fn mood_analysis(&self, id: Uuid) -> Option<MoodAnalysis>;
    async fn create_mood_analysis(&self, new: NewMoodAnalysis) -> MoodAnalysis;
    async fn mood_analyses_by_session(&self, session_id: &str) -> Vec<MoodAnalysis>;

    // Preferences
    async fn user_preferences(
        &self,
        user_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Option<UserPreferences>;
    async fn create_user_preferences(&self, new: NewUserPreferences) -> UserPreferences;
    /// Partial merge: `None` fields keep their stored value. Returns `None`
    /// for an unknown id.
    async fn update_user_preferences(
        &self,
        id: Uuid,
        patch: UserPreferencesUpdate,
    ) -> Option<UserPreferences>;
}
