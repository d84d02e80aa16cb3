use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ingredient entry as supplied by a client: a free-text name plus an
/// optional quantity description ("2 cups", "a pinch").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<String>,
}

impl IngredientEntry {
    /// Entries without a usable name are skipped by the store, not rejected.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Payload for creating a recipe or replacing one in place.
///
/// `ingredients` and `steps` default to empty when absent from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeInput {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Summary row for recipe listings; steps and ingredients are not hydrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub cover_image_url: Option<String>,
}

/// Fully hydrated recipe as returned by `GET /recipes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub cover_image_url: Option<String>,
    pub steps: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub created_at: DateTime<Utc>,
}

/// Hydrated join row: stored (lowercased) ingredient name plus the
/// per-recipe amount. No guaranteed order unless the caller sorts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_with_blank_name_is_skippable() {
        let named = IngredientEntry { name: "Flour".to_owned(), amount: None };
        let blank = IngredientEntry { name: "   ".to_owned(), amount: Some("2".to_owned()) };
        let empty = IngredientEntry { name: String::new(), amount: None };
        assert!(named.has_name());
        assert!(!blank.has_name());
        assert!(!empty.has_name());
    }
}
