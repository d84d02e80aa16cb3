//! PostgreSQL backend for the Ojakh recipe catalog.
//!
//! Split into modular files by domain concern: `recipes` for the header
//! CRUD and the match-all-ingredients search, `ingredients` for the
//! name-normalizing upsert, `links` for the join-table phase of the
//! transactional writes.

mod ingredients;
mod links;
mod recipes;

use chrono::{DateTime, Utc};
use ojakh_core::{
    env_parse_with_default, Recipe, RecipeSummary, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::schema::ensure_recipe_schema;

/// Handle to the Ojakh database. Cheap to clone; lives for the process.
#[derive(Clone, Debug)]
pub struct RecipeDb {
    pool: PgPool,
}

impl RecipeDb {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let max_connections =
            env_parse_with_default("OJAKH_PG_MAX_CONNECTIONS", PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        ensure_recipe_schema(&pool).await.map_err(|e| StorageError::Schema(e.to_string()))?;
        tracing::info!("RecipeDb initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn parse_json_value<T: serde::de::DeserializeOwned>(val: &serde_json::Value) -> Vec<T> {
    serde_json::from_value(val.clone()).unwrap_or_default()
}

pub(crate) fn row_to_summary(row: &sqlx::postgres::PgRow) -> Result<RecipeSummary, StorageError> {
    Ok(RecipeSummary {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        category: row.try_get("category")?,
        cover_image_url: row.try_get("cover_image_url")?,
    })
}

pub(crate) fn row_to_recipe(row: &sqlx::postgres::PgRow) -> Result<Recipe, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let steps: serde_json::Value = row.try_get("steps")?;
    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        category: row.try_get("category")?,
        cover_image_url: row.try_get("cover_image_url")?,
        steps: parse_json_value(&steps),
        ingredients: Vec::new(),
        created_at,
    })
}

pub(crate) const RECIPE_SUMMARY_COLUMNS: &str = "id, title, category, cover_image_url";

pub(crate) const RECIPE_COLUMNS: &str =
    "id, title, category, cover_image_url, steps, created_at";
