//! Storage backend trait abstraction.
//!
//! Async domain traits for the recipe catalog and the chord reference list,
//! implemented by the PostgreSQL-backed `RecipeDb` and `ChordDb`.

pub mod chord;
pub mod ingredient;
pub mod recipe;

pub use chord::ChordStore;
pub use ingredient::IngredientStore;
pub use recipe::RecipeStore;
