//! Storage layer for the Ojakh recipe catalog and the Nvag chord reference.
//!
//! PostgreSQL via sqlx, one connection pool per logical database. Reads
//! borrow pool connections implicitly; multi-statement writes run inside
//! a `sqlx::Transaction` which rolls back on drop, so any failure path
//! leaves the database untouched and returns the connection to the pool.

mod chord_db;
mod error;
mod recipe_db;
mod schema;
pub mod traits;

pub use chord_db::ChordDb;
pub use error::StorageError;
pub use recipe_db::RecipeDb;
pub use traits::{ChordStore, IngredientStore, RecipeStore};
