//! HTTP API server for the Ojakh and Nvag services.

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use ojakh_storage::{ChordDb, RecipeDb};

pub use api_types::{DeleteResponse, FindByIngredientsRequest, RecipeSavedResponse};

/// Shared application state for all HTTP handlers.
///
/// Holds the two long-lived database handles; there is no other shared
/// mutable state, so requests only coordinate through PostgreSQL.
pub struct AppState {
    /// Ojakh database: recipes, ingredients, join rows.
    pub recipes: Arc<RecipeDb>,
    /// Nvag database: chord reference list.
    pub chords: Arc<ChordDb>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route(
            "/recipes",
            get(handlers::recipes::list_recipes).post(handlers::recipes::create_recipe),
        )
        .route("/recipes/find-by-ingredients", post(handlers::recipes::find_by_ingredients))
        .route(
            "/recipes/{id}",
            get(handlers::recipes::get_recipe)
                .put(handlers::recipes::update_recipe)
                .delete(handlers::recipes::delete_recipe),
        )
        .route("/ingredients", get(handlers::ingredients::list_ingredients))
        .route("/categories", get(handlers::recipes::list_categories))
        .route(
            "/chords",
            get(handlers::chords::list_chords).post(handlers::chords::add_chord),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn welcome() -> &'static str {
    "Welcome to the Ojakh kitchen"
}

async fn health() -> &'static str {
    "ok"
}
