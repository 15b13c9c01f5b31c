//! In-memory storage.
//!
//! Backs every collection with a `Vec` behind an `RwLock`, which keeps
//! insertion order (the contract for mood lookups) and supports concurrent
//! read/insert from multiple worker threads. Nothing here is persistent.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::sync::RwLock;
use uuid::Uuid;

use super::seed::sample_recipes;
use super::{Storage, StorageError};
use crate::types::{
    MoodAnalysis, NewMoodAnalysis, NewRecipe, NewUserPreferences, Recipe, RecipeFilter,
    UserPreferences, UserPreferencesUpdate,
};

/// Seed recipes carry an established rating; created ones start at zero.
const SEED_RATING: f32 = 4.7;

pub struct MemStorage {
    recipes: RwLock<Vec<Recipe>>,
    analyses: RwLock<Vec<MoodAnalysis>>,
    preferences: RwLock<Vec<UserPreferences>>,
}

impl MemStorage {
    /// An empty store. Nothing is seeded implicitly.
    pub fn new() -> Self {
        Self {
            recipes: RwLock::new(Vec::new()),
            analyses: RwLock::new(Vec::new()),
            preferences: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-populated with the sample recipe catalog.
    pub fn seeded() -> Self {
        let store = Self::new();
        let mut rng = rand::thread_rng();
        let mut recipes = store.recipes.write().unwrap();
        for new in sample_recipes() {
            recipes.push(Recipe {
                id: Uuid::new_v4(),
                title: new.title,
                description: new.description,
                image_url: new.image_url,
                cook_time: new.cook_time,
                difficulty: new.difficulty,
                cuisine: new.cuisine,
                category: new.category,
                ingredients: new.ingredients,
                instructions: new.instructions,
                nutrition: new.nutrition,
                dietary_tags: new.dietary_tags,
                mood_tags: new.mood_tags,
                rating: SEED_RATING,
                review_count: rng.gen_range(50..550),
                is_active: true,
            });
        }
        drop(recipes);
        store
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn recipe(&self, id: Uuid) -> Option<Recipe> {
        self.recipes
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    async fn recipes(&self, filter: Option<&RecipeFilter>) -> Vec<Recipe> {
        self.recipes
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.is_active)
            .filter(|r| filter.map_or(true, |f| f.matches(r)))
            .cloned()
            .collect()
    }

    async fn recipes_by_mood(&self, mood: &str) -> Vec<Recipe> {
        self.recipes
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.is_active && r.mood_tags.iter().any(|t| t == mood))
            .cloned()
            .collect()
    }

    async fn search_recipes(&self, query: &str) -> Vec<Recipe> {
        let term = query.to_lowercase();
        self.recipes
            .read()
            .unwrap()
            .iter()
            .filter(|r| {
                r.is_active
                    && (r.title.to_lowercase().contains(&term)
                        || r.description.to_lowercase().contains(&term)
                        || r.ingredients.iter().any(|i| i.to_lowercase().contains(&term))
                        || r.mood_tags.iter().any(|t| t.to_lowercase().contains(&term)))
            })
            .cloned()
            .collect()
    }

    async fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, StorageError> {
        if new.mood_tags.is_empty() {
            return Err(StorageError::EmptyMoodTags);
        }
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            image_url: new.image_url,
            cook_time: new.cook_time,
            difficulty: new.difficulty,
            cuisine: new.cuisine,
            category: new.category,
            ingredients: new.ingredients,
            instructions: new.instructions,
            nutrition: new.nutrition,
            dietary_tags: new.dietary_tags,
            mood_tags: new.mood_tags,
            rating: 0.0,
            review_count: 0,
            is_active: true,
        };
        self.recipes.write().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn mood_analysis(&self, id: Uuid) -> Option<MoodAnalysis> {
        self.analyses
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    async fn create_mood_analysis(&self, new: NewMoodAnalysis) -> MoodAnalysis {
        let analysis = MoodAnalysis {
            id: Uuid::new_v4(),
            session_id: new.session_id,
            detection_type: new.detection_type,
            input_data: new.input_data,
            detected_mood: new.detected_mood,
            confidence: new.confidence,
            ai_response: new.ai_response,
            recommended_recipes: new.recommended_recipes,
            created_at: Utc::now(),
        };
        self.analyses.write().unwrap().push(analysis.clone());
        analysis
    }

    async fn mood_analyses_by_session(&self, session_id: &str) -> Vec<MoodAnalysis> {
        self.analyses
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.session_id.as_deref() == Some(session_id))
            .cloned()
            .collect()
    }

    async fn user_preferences(
        &self,
        user_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Option<UserPreferences> {
        self.preferences
            .read()
            .unwrap()
            .iter()
            .find(|p| {
                (user_id.is_some() && p.user_id.as_deref() == user_id)
                    || (session_id.is_some() && p.session_id.as_deref() == session_id)
            })
            .cloned()
    }

    async fn create_user_preferences(&self, new: NewUserPreferences) -> UserPreferences {
        let preferences = UserPreferences {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            session_id: new.session_id,
            dietary_restrictions: new.dietary_restrictions,
            allergies: new.allergies,
            preferred_cuisines: new.preferred_cuisines,
            disliked_ingredients: new.disliked_ingredients,
            favorite_recipes: new.favorite_recipes,
        };
        self.preferences.write().unwrap().push(preferences.clone());
        preferences
    }

    async fn update_user_preferences(
        &self,
        id: Uuid,
        patch: UserPreferencesUpdate,
    ) -> Option<UserPreferences> {
        let mut preferences = self.preferences.write().unwrap();
        let existing = preferences.iter_mut().find(|p| p.id == id)?;

        if let Some(user_id) = patch.user_id {
            existing.user_id = Some(user_id);
        }
        if let Some(session_id) = patch.session_id {
            existing.session_id = Some(session_id);
        }
        if let Some(dietary_restrictions) = patch.dietary_restrictions {
            existing.dietary_restrictions = dietary_restrictions;
        }
        if let Some(allergies) = patch.allergies {
            existing.allergies = allergies;
        }
        if let Some(preferred_cuisines) = patch.preferred_cuisines {
            existing.preferred_cuisines = preferred_cuisines;
        }
        if let Some(disliked_ingredients) = patch.disliked_ingredients {
            existing.disliked_ingredients = disliked_ingredients;
        }
        if let Some(favorite_recipes) = patch.favorite_recipes {
            existing.favorite_recipes = favorite_recipes;
        }

        Some(existing.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DetectionType, Difficulty};
    use serde_json::json;

    fn new_recipe(title: &str, mood_tags: &[&str]) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            description: format!("{} description", title),
            image_url: "https://example.com/img.jpg".to_string(),
            cook_time: 20,
            difficulty: Difficulty::Easy,
            cuisine: None,
            category: None,
            ingredients: vec!["water".to_string()],
            instructions: vec!["boil".to_string()],
            nutrition: None,
            dietary_tags: Vec::new(),
            mood_tags: mood_tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn seeded_store_has_active_catalog() {
        let store = MemStorage::seeded();
        let all = store.recipes(None).await;
        assert_eq!(all.len(), 6);
        assert!(all.iter().all(|r| r.is_active));
        assert!(all.iter().all(|r| !r.mood_tags.is_empty()));
        assert!(all.iter().all(|r| (50..550).contains(&r.review_count)));
    }

    #[tokio::test]
    async fn recipe_lookup_misses_are_none() {
        let store = MemStorage::seeded();
        assert!(store.recipe(Uuid::new_v4()).await.is_none());

        let known = store.recipes(None).await[0].id;
        assert_eq!(store.recipe(known).await.unwrap().id, known);
    }

    #[tokio::test]
    async fn create_assigns_defaults() {
        let store = MemStorage::new();
        let created = store
            .create_recipe(new_recipe("Midnight Toast", &["comfort"]))
            .await
            .unwrap();
        assert_eq!(created.rating, 0.0);
        assert_eq!(created.review_count, 0);
        assert!(created.is_active);
        assert_eq!(store.recipe(created.id).await.unwrap().title, "Midnight Toast");
    }

    #[tokio::test]
    async fn create_rejects_empty_mood_tags() {
        let store = MemStorage::new();
        let result = store.create_recipe(new_recipe("Tagless", &[])).await;
        assert!(matches!(result, Err(StorageError::EmptyMoodTags)));
    }

    #[tokio::test]
    async fn mood_lookup_excludes_inactive_recipes() {
        let store = MemStorage::new();
        store
            .create_recipe(new_recipe("Spin Class Smoothie", &["energetic"]))
            .await
            .unwrap();
        let retired = store
            .create_recipe(new_recipe("Retired Shake", &["energetic"]))
            .await
            .unwrap();
        store
            .recipes
            .write()
            .unwrap()
            .iter_mut()
            .find(|r| r.id == retired.id)
            .unwrap()
            .is_active = false;

        let found = store.recipes_by_mood("energetic").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Spin Class Smoothie");
        assert!(found
            .iter()
            .all(|r| r.mood_tags.iter().any(|t| t == "energetic")));
    }

    #[tokio::test]
    async fn mood_lookup_preserves_insertion_order() {
        let store = MemStorage::new();
        for title in ["First", "Second", "Third"] {
            store
                .create_recipe(new_recipe(title, &["calm"]))
                .await
                .unwrap();
        }
        let titles: Vec<String> = store
            .recipes_by_mood("calm")
            .await
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn search_matches_title_case_insensitively() {
        let store = MemStorage::seeded();
        let found = store.search_recipes("soup").await;
        assert!(found.iter().any(|r| r.title == "Cozy Vegetable Soup"));
    }

    #[tokio::test]
    async fn search_matches_ingredients_and_mood_tags() {
        let store = MemStorage::seeded();
        assert!(!store.search_recipes("quinoa").await.is_empty());
        assert!(!store.search_recipes("celebratory").await.is_empty());
    }

    #[tokio::test]
    async fn search_miss_is_empty_not_error() {
        let store = MemStorage::seeded();
        assert!(store.search_recipes("doesnotexist").await.is_empty());
    }

    #[tokio::test]
    async fn filters_are_conjunctive() {
        let store = MemStorage::seeded();
        let filter = RecipeFilter {
            mood: Some("happy".to_string()),
            category: Some("breakfast".to_string()),
            ..Default::default()
        };
        let found = store.recipes(Some(&filter)).await;
        assert!(!found.is_empty());
        for recipe in &found {
            assert!(recipe.mood_tags.iter().any(|t| t == "happy"));
            assert_eq!(recipe.category.as_deref(), Some("breakfast"));
        }

        let impossible = RecipeFilter {
            mood: Some("happy".to_string()),
            max_cook_time: Some(1),
            ..Default::default()
        };
        assert!(store.recipes(Some(&impossible)).await.is_empty());
    }

    #[tokio::test]
    async fn analyses_group_by_session() {
        let store = MemStorage::new();
        for session in ["session_a", "session_a", "session_b"] {
            store
                .create_mood_analysis(NewMoodAnalysis {
                    session_id: Some(session.to_string()),
                    detection_type: DetectionType::Text,
                    input_data: Some(json!({"text": "hi"})),
                    detected_mood: "neutral".to_string(),
                    confidence: 0.9,
                    ai_response: None,
                    recommended_recipes: Vec::new(),
                })
                .await;
        }

        assert_eq!(store.mood_analyses_by_session("session_a").await.len(), 2);
        assert_eq!(store.mood_analyses_by_session("session_b").await.len(), 1);
        assert!(store.mood_analyses_by_session("session_c").await.is_empty());
    }

    #[tokio::test]
    async fn analysis_lookup_by_id() {
        let store = MemStorage::new();
        let created = store
            .create_mood_analysis(NewMoodAnalysis {
                session_id: None,
                detection_type: DetectionType::Image,
                input_data: None,
                detected_mood: "happy".to_string(),
                confidence: 0.8,
                ai_response: None,
                recommended_recipes: Vec::new(),
            })
            .await;
        assert_eq!(
            store.mood_analysis(created.id).await.unwrap().detected_mood,
            "happy"
        );
        assert!(store.mood_analysis(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn preferences_merge_preserves_absent_fields() {
        let store = MemStorage::new();
        let created = store
            .create_user_preferences(NewUserPreferences {
                session_id: Some("session_a".to_string()),
                dietary_restrictions: vec!["vegan".to_string()],
                allergies: vec!["peanuts".to_string()],
                ..Default::default()
            })
            .await;

        let updated = store
            .update_user_preferences(
                created.id,
                UserPreferencesUpdate {
                    preferred_cuisines: Some(vec!["thai".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.preferred_cuisines, ["thai"]);
        assert_eq!(updated.dietary_restrictions, ["vegan"]);
        assert_eq!(updated.allergies, ["peanuts"]);
        assert_eq!(updated.session_id.as_deref(), Some("session_a"));
    }

    #[tokio::test]
    async fn preferences_update_unknown_id_is_none() {
        let store = MemStorage::new();
        let result = store
            .update_user_preferences(Uuid::new_v4(), UserPreferencesUpdate::default())
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn preferences_lookup_matches_either_key() {
        let store = MemStorage::new();
        store
            .create_user_preferences(NewUserPreferences {
                user_id: Some("user_1".to_string()),
                session_id: Some("session_x".to_string()),
                ..Default::default()
            })
            .await;

        assert!(store.user_preferences(Some("user_1"), None).await.is_some());
        assert!(store
            .user_preferences(None, Some("session_x"))
            .await
            .is_some());
        assert!(store.user_preferences(None, None).await.is_none());
        assert!(store.user_preferences(Some("user_2"), None).await.is_none());
    }
}
