//! IngredientStore implementation for RecipeDb.

use super::*;

use crate::traits::IngredientStore;
use async_trait::async_trait;
use sqlx::PgConnection;

/// Lowercase `name` and resolve it to an ingredient id on the given
/// connection, inserting the row if absent.
///
/// `ON CONFLICT .. DO UPDATE` makes `RETURNING id` yield the existing row's
/// id when the name is already taken, so racing writers all converge on the
/// same id without application-level locking. Runs on whatever connection
/// the caller passes — inside the recipe write transaction this never
/// commits on its own.
pub(crate) async fn upsert_ingredient_on(
    conn: &mut PgConnection,
    name: &str,
) -> Result<String, StorageError> {
    let name = name.to_lowercase();
    let (id,): (String,) = sqlx::query_as(
        "INSERT INTO ingredients (id, name) VALUES ($1, $2)
         ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
         RETURNING id",
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(&name)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

#[async_trait]
impl IngredientStore for RecipeDb {
    async fn upsert_ingredient(&self, name: &str) -> Result<String, StorageError> {
        let mut conn = self.pool.acquire().await?;
        upsert_ingredient_on(&mut conn, name).await
    }

    async fn list_ingredient_names(&self) -> Result<Vec<String>, StorageError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM ingredients ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }
}
