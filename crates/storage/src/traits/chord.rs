use async_trait::async_trait;
use ojakh_core::{Chord, ChordInput};

use crate::error::StorageError;

/// Chord reference list operations (Nvag database).
#[async_trait]
pub trait ChordStore: Send + Sync {
    /// All chords, alphabetical by name.
    async fn list_chords(&self) -> Result<Vec<Chord>, StorageError>;

    /// Add one chord voicing.
    async fn add_chord(&self, input: ChordInput) -> Result<Chord, StorageError>;
}
