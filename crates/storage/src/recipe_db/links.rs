//! Join-table phase of the transactional recipe writes.
//!
//! These helpers only ever run on a connection borrowed from an open
//! transaction in `recipes.rs`; they never commit independently.

use sqlx::PgConnection;

use crate::error::StorageError;

/// Insert one join row. No dedup of its own: calling twice with the same
/// pair creates two rows.
pub(crate) async fn link_ingredient(
    conn: &mut PgConnection,
    recipe_id: &str,
    ingredient_id: &str,
    amount: Option<&str>,
) -> Result<(), StorageError> {
    sqlx::query(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
    )
    .bind(recipe_id)
    .bind(ingredient_id)
    .bind(amount)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete every join row for the recipe; first phase of an update.
pub(crate) async fn unlink_all(
    conn: &mut PgConnection,
    recipe_id: &str,
) -> Result<(), StorageError> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(conn)
        .await?;
    Ok(())
}
