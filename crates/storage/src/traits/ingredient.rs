use async_trait::async_trait;

use crate::error::StorageError;

/// Ingredient name normalization.
///
/// Names are lowercased before storage and deduplicated by a unique
/// constraint; ingredients are created lazily on first use and never
/// deleted by this system.
#[async_trait]
pub trait IngredientStore: Send + Sync {
    /// Lowercase `name` and resolve it to a stable id, creating the row if
    /// it does not exist yet. Atomic insert-or-fetch: concurrent callers
    /// racing on the same name all receive the same id.
    async fn upsert_ingredient(&self, name: &str) -> Result<String, StorageError>;

    /// Distinct stored names, alphabetical.
    async fn list_ingredient_names(&self) -> Result<Vec<String>, StorageError>;
}
