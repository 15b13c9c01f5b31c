pub mod classifier;
pub mod mood;
pub mod storage;
pub mod types;
pub mod upload;

pub use classifier::{
    classifier_from_env, ClassifierError, HeuristicClassifier, HuggingFaceClassifier,
    MoodClassifier, MoodDetection,
};
pub use upload::{validate_image, MAX_IMAGE_BYTES};
pub use mood::mood_tags_for_emotion;
pub use storage::{MemStorage, Storage, StorageError};
pub use types::{
    DetectionType, Difficulty, MoodAnalysis, NewMoodAnalysis, NewRecipe, NewUserPreferences,
    Nutrition, Recipe, RecipeFilter, UserPreferences, UserPreferencesUpdate,
};
