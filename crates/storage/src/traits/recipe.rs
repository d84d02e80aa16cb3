use async_trait::async_trait;
use ojakh_core::{Recipe, RecipeInput, RecipeSummary};

use crate::error::StorageError;

/// Recipe catalog operations.
///
/// `create_recipe` and `update_recipe` are transactional: the header write,
/// the ingredient upserts and the join-row inserts either all commit or none
/// do. Ingredient entries with an empty name are silently skipped.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new recipe with its ingredient links. Returns the new id.
    async fn create_recipe(&self, input: RecipeInput) -> Result<String, StorageError>;

    /// Summary rows ordered by creation time, most recent first.
    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, StorageError>;

    /// Full recipe with hydrated ingredients. `NotFound` if absent.
    async fn get_recipe(&self, id: &str) -> Result<Recipe, StorageError>;

    /// Update header fields and replace the ingredient link set atomically.
    /// `NotFound` if no recipe row matched (nothing is relinked in that case).
    async fn update_recipe(&self, id: &str, input: RecipeInput) -> Result<(), StorageError>;

    /// Delete a recipe; join rows go with it via cascade. Returns the
    /// deleted title, `NotFound` if no row matched.
    async fn delete_recipe(&self, id: &str) -> Result<String, StorageError>;

    /// Distinct non-empty categories, alphabetical.
    async fn list_categories(&self) -> Result<Vec<String>, StorageError>;

    /// Recipes whose entire required ingredient set is contained in
    /// `candidates` (compared lowercased). Recipes with no links match
    /// vacuously. Empty `candidates` returns `[]` without querying.
    async fn find_recipes_by_ingredients(
        &self,
        candidates: &[String],
    ) -> Result<Vec<RecipeSummary>, StorageError>;
}
