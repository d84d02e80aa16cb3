use axum::{extract::State, Json};
use std::sync::Arc;

use ojakh_storage::IngredientStore;

use crate::api_error::ApiError;
use crate::AppState;

pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.recipes.list_ingredient_names().await?))
}
