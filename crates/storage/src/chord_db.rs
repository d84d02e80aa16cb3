//! PostgreSQL backend for the Nvag chord reference.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ojakh_core::{
    env_parse_with_default, Chord, ChordInput, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::schema::ensure_chord_schema;
use crate::traits::ChordStore;

/// Handle to the Nvag database. Independent of `RecipeDb`; the two pools
/// share nothing but the process.
#[derive(Clone, Debug)]
pub struct ChordDb {
    pool: PgPool,
}

impl ChordDb {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let max_connections =
            env_parse_with_default("NVAG_PG_MAX_CONNECTIONS", PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        ensure_chord_schema(&pool).await.map_err(|e| StorageError::Schema(e.to_string()))?;
        tracing::info!("ChordDb initialized");
        Ok(Self { pool })
    }
}

fn row_to_chord(row: &sqlx::postgres::PgRow) -> Result<Chord, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Chord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        frets: row.try_get("frets")?,
        fingering: row.try_get("fingering")?,
        created_at,
    })
}

const CHORD_COLUMNS: &str = "id, name, frets, fingering, created_at";

#[async_trait]
impl ChordStore for ChordDb {
    async fn list_chords(&self) -> Result<Vec<Chord>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {CHORD_COLUMNS} FROM chords ORDER BY name"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_chord).collect()
    }

    async fn add_chord(&self, input: ChordInput) -> Result<Chord, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            "INSERT INTO chords (id, name, frets, fingering)
             VALUES ($1, $2, $3, $4)
             RETURNING {CHORD_COLUMNS}"
        ))
        .bind(&id)
        .bind(&input.name)
        .bind(&input.frets)
        .bind(&input.fingering)
        .fetch_one(&self.pool)
        .await?;
        row_to_chord(&row)
    }
}
