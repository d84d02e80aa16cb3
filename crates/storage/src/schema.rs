//! Schema setup for the two logical databases.
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS` statements run once at startup.
//! The recipe model is the normalized three-table layout: header rows in
//! `recipes`, deduplicated names in `ingredients`, and per-recipe amounts
//! in the `recipe_ingredients` join table.

use anyhow::Result;
use sqlx::PgPool;

/// Create the Ojakh (recipe catalog) tables and indexes.
pub(crate) async fn ensure_recipe_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            category TEXT,
            cover_image_url TEXT,
            steps JSONB NOT NULL DEFAULT '[]',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created ON recipes (created_at DESC)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_category ON recipes (category)")
        .execute(pool)
        .await?;

    // Names are stored lowercased; UNIQUE makes the upsert an atomic
    // insert-or-fetch under concurrent writers.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ingredients (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipe_ingredients (
            recipe_id TEXT NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            ingredient_id TEXT NOT NULL REFERENCES ingredients(id),
            amount TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_ri_recipe ON recipe_ingredients (recipe_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("ojakh schema ready");
    Ok(())
}

/// Create the Nvag (chord reference) table.
pub(crate) async fn ensure_chord_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chords (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            frets TEXT NOT NULL,
            fingering TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_chords_name ON chords (name)")
        .execute(pool)
        .await?;

    tracing::info!("nvag schema ready");
    Ok(())
}
