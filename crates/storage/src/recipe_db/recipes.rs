//! RecipeStore implementation for RecipeDb.

use super::*;

use super::ingredients::upsert_ingredient_on;
use super::links::{link_ingredient, unlink_all};
use crate::traits::RecipeStore;
use async_trait::async_trait;
use ojakh_core::{RecipeIngredient, RecipeInput};

#[async_trait]
impl RecipeStore for RecipeDb {
    async fn create_recipe(&self, input: RecipeInput) -> Result<String, StorageError> {
        let mut tx = self.pool.begin().await?;
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO recipes (id, title, category, cover_image_url, steps)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind(&input.title)
        .bind(&input.category)
        .bind(&input.cover_image_url)
        .bind(serde_json::to_value(&input.steps)?)
        .execute(&mut *tx)
        .await?;

        for entry in input.ingredients.iter().filter(|e| e.has_name()) {
            let ingredient_id = upsert_ingredient_on(&mut tx, &entry.name).await?;
            link_ingredient(&mut tx, &id, &ingredient_id, entry.amount.as_deref()).await?;
        }

        tx.commit().await?;
        tracing::debug!(recipe_id = %id, "recipe created");
        Ok(id)
    }

    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_SUMMARY_COLUMNS} FROM recipes ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_summary).collect()
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, StorageError> {
        let row = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::NotFound { entity: "recipe", id: id.to_owned() })?;
        let mut recipe = row_to_recipe(&row)?;

        let linked: Vec<(String, Option<String>)> = sqlx::query_as(
            "SELECT i.name, ri.amount
             FROM recipe_ingredients ri
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE ri.recipe_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        recipe.ingredients =
            linked.into_iter().map(|(name, amount)| RecipeIngredient { name, amount }).collect();
        Ok(recipe)
    }

    async fn update_recipe(&self, id: &str, input: RecipeInput) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE recipes SET title = $1, category = $2, cover_image_url = $3, steps = $4
             WHERE id = $5",
        )
        .bind(&input.title)
        .bind(&input.category)
        .bind(&input.cover_image_url)
        .bind(serde_json::to_value(&input.steps)?)
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(StorageError::NotFound { entity: "recipe", id: id.to_owned() });
        }

        unlink_all(&mut tx, id).await?;
        for entry in input.ingredients.iter().filter(|e| e.has_name()) {
            let ingredient_id = upsert_ingredient_on(&mut tx, &entry.name).await?;
            link_ingredient(&mut tx, id, &ingredient_id, entry.amount.as_deref()).await?;
        }

        tx.commit().await?;
        tracing::debug!(recipe_id = %id, "recipe updated");
        Ok(())
    }

    async fn delete_recipe(&self, id: &str) -> Result<String, StorageError> {
        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM recipes WHERE id = $1 RETURNING title")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        deleted
            .map(|(title,)| title)
            .ok_or_else(|| StorageError::NotFound { entity: "recipe", id: id.to_owned() })
    }

    async fn list_categories(&self) -> Result<Vec<String>, StorageError> {
        let categories: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT category FROM recipes
             WHERE category IS NOT NULL AND category <> ''
             ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn find_recipes_by_ingredients(
        &self,
        candidates: &[String],
    ) -> Result<Vec<RecipeSummary>, StorageError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        // Stored names are lowercased at write time; normalize candidates
        // the same way so casing never under-matches.
        let candidates: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

        // A recipe matches when none of its linked ingredients falls outside
        // the candidate set; recipes with zero links match vacuously.
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_SUMMARY_COLUMNS} FROM recipes r
             WHERE NOT EXISTS (
                 SELECT 1
                 FROM recipe_ingredients ri
                 JOIN ingredients i ON i.id = ri.ingredient_id
                 WHERE ri.recipe_id = r.id
                   AND i.name <> ALL($1)
             )
             ORDER BY r.created_at DESC"
        ))
        .bind(&candidates)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_summary).collect()
    }
}
