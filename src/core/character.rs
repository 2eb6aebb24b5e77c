//! Detrimental characters that can be dealt to players.

use serde::{Deserialize, Serialize};

/// A character definition, keyed by ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    /// Not dealt in two-player games.
    #[serde(default, rename = "not2P")]
    pub not_2p: bool,
}

impl Character {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            emoji: String::new(),
            not_2p: false,
        }
    }
}
