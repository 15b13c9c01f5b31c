pub mod by_mood;
pub mod get;
pub mod list;
pub mod search;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/search/{query}", get(search::search_recipes))
        .route("/mood/{mood}", get(by_mood::recipes_by_mood))
        .route("/{id}", get(get::get_recipe))
}

#[derive(OpenApi)]
#[openapi(paths(
    list::list_recipes,
    get::get_recipe,
    search::search_recipes,
    by_mood::recipes_by_mood,
))]
pub struct ApiDoc;
