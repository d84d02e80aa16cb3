use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use ojakh_core::{Recipe, RecipeInput, RecipeSummary};
use ojakh_storage::RecipeStore;

use crate::api_error::ApiError;
use crate::api_types::{DeleteResponse, FindByIngredientsRequest, RecipeSavedResponse};
use crate::AppState;

pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<RecipeSavedResponse>), ApiError> {
    let title = input.title.clone();
    let id = state.recipes.create_recipe(input).await?;
    Ok((StatusCode::CREATED, Json(RecipeSavedResponse { id, title })))
}

pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecipeSummary>>, ApiError> {
    Ok(Json(state.recipes.list_recipes().await?))
}

pub async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    Ok(Json(state.recipes.get_recipe(&id).await?))
}

pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<RecipeSavedResponse>, ApiError> {
    let title = input.title.clone();
    state.recipes.update_recipe(&id, input).await?;
    Ok(Json(RecipeSavedResponse { id, title }))
}

pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let title = state.recipes.delete_recipe(&id).await?;
    Ok(Json(DeleteResponse { message: format!("deleted '{title}'") }))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.recipes.list_categories().await?))
}

pub async fn find_by_ingredients(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FindByIngredientsRequest>,
) -> Result<Json<Vec<RecipeSummary>>, ApiError> {
    Ok(Json(state.recipes.find_recipes_by_ingredients(&req.my_ingredients).await?))
}
