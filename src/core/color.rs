//! Clue colors.

use serde::{Deserialize, Serialize};

/// A color that can be used in a color clue.
///
/// Colors are keyed by name. The abbreviation is what players type in notes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// Unique color name ("Red", "Blue", ...).
    pub name: String,

    /// Single-letter abbreviation.
    #[serde(default)]
    pub abbreviation: String,

    /// Hex fill used when drawing cards.
    #[serde(default)]
    pub fill: String,
}

impl Color {
    /// Create a color whose abbreviation is the first letter of its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let abbreviation = name.chars().next().map(String::from).unwrap_or_default();
        Self {
            name,
            abbreviation,
            fill: String::new(),
        }
    }

    /// Set the fill (builder pattern).
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }
}
