//! Suits with their resolved clue colors.

use serde::Serialize;

use super::color::Color;

/// Appended to a suit's name to name its reversed counterpart.
pub const SUIT_REVERSED_SUFFIX: &str = " Reversed";

/// A suit as seen by the variant compiler.
///
/// Suits are built by the suit table; clue colors are already resolved
/// against the color table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suit {
    /// Unique suit name ("Red", "Rainbow", "Red Reversed", ...).
    pub name: String,

    /// Short code used by compact variant IDs.
    pub id: String,

    /// Default abbreviation used in notes.
    pub abbreviation: String,

    /// Name shown to players.
    pub display_name: String,

    /// Colors whose clues touch this suit.
    pub clue_colors: Vec<Color>,

    /// Touched by every color clue.
    pub all_clue_colors: bool,

    /// Touched by no color clue.
    pub no_clue_colors: bool,

    /// Touched by every rank clue.
    pub all_clue_ranks: bool,

    /// Touched by no rank clue.
    pub no_clue_ranks: bool,

    /// Only one copy of each card.
    pub one_of_each: bool,

    /// Played from 5 down to 1.
    pub reversed: bool,

    /// Players always need to see the suit name.
    pub show_suit_name: bool,
}

impl Suit {
    /// Create a plain suit touched by the given colors.
    pub fn new(name: impl Into<String>, id: impl Into<String>, clue_colors: Vec<Color>) -> Self {
        let name = name.into();
        let abbreviation = name.chars().next().map(String::from).unwrap_or_default();
        Self {
            display_name: name.clone(),
            name,
            id: id.into(),
            abbreviation,
            clue_colors,
            all_clue_colors: false,
            no_clue_colors: false,
            all_clue_ranks: false,
            no_clue_ranks: false,
            one_of_each: false,
            reversed: false,
            show_suit_name: false,
        }
    }

    /// Set the abbreviation (builder pattern).
    #[must_use]
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    /// Mark the suit as touched by every color clue.
    #[must_use]
    pub fn all_clue_colors(mut self) -> Self {
        self.all_clue_colors = true;
        self
    }

    /// Mark the suit as needing its name displayed.
    #[must_use]
    pub fn show_suit_name(mut self) -> Self {
        self.show_suit_name = true;
        self
    }

    /// The reversed counterpart of this suit.
    ///
    /// The short code is kept: compact IDs select reversal with a suit
    /// modifier, not a separate code.
    #[must_use]
    pub fn reversed_counterpart(&self) -> Self {
        let mut suit = self.clone();
        suit.name.push_str(SUIT_REVERSED_SUFFIX);
        suit.display_name.push_str(SUIT_REVERSED_SUFFIX);
        suit.reversed = true;
        suit
    }

    /// Whether the suit is touched by more than one clue color.
    #[must_use]
    pub fn is_multi_color(&self) -> bool {
        self.clue_colors.len() > 1
    }
}
