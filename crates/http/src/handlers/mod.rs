pub mod chords;
pub mod ingredients;
pub mod recipes;
