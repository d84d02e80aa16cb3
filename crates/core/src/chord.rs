use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chord voicing in the Nvag reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chord {
    pub id: String,
    pub name: String,
    /// Fret positions low string to high, e.g. "x32010" for open C major.
    pub frets: String,
    pub fingering: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a chord to the reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordInput {
    pub name: String,
    pub frets: String,
    #[serde(default)]
    pub fingering: Option<String>,
}
