//! Compiled variants.
//!
//! A `Variant` is the canonical, fully resolved form of a variant. It is
//! built once by the normalizer and never modified afterwards.

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::core::{Color, Rank, Ranks, Suit};

use super::modifier::{Modifier, ModifierSet};

/// Sentinel used in serialized output for "no special rank".
pub const NO_SPECIAL_RANK: i32 = -1;

/// A compiled variant.
///
/// Serializes to the same camelCase shape the rest of the application
/// reads, with `specialRank` as `-1` when there is no special rank.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    pub id: u32,
    pub suits: Vec<Suit>,

    /// Ranks the cards of each suit have.
    pub ranks: Ranks,

    /// Colors that can be clued.
    pub clue_colors: Vec<Color>,

    /// Ranks that can be clued.
    pub clue_ranks: Ranks,

    pub color_clues_touch_nothing: bool,
    pub rank_clues_touch_nothing: bool,

    #[serde(serialize_with = "serialize_special_rank")]
    pub special_rank: Option<Rank>,
    pub special_all_clue_colors: bool,
    pub special_all_clue_ranks: bool,
    pub special_no_clue_colors: bool,
    pub special_no_clue_ranks: bool,
    pub special_deceptive: bool,

    pub odds_and_evens: bool,
    pub funnels: bool,
    pub chimneys: bool,
    pub show_suit_names: bool,

    /// Suit count times points per stack. START cards add nothing.
    pub max_score: u32,

    /// Some suit has more than one clue color, so corner elements on the
    /// card must move out of the way of the color triangle.
    pub offset_corner_elements: bool,

    pub suit_abbreviations: Vec<String>,

    #[serde(serialize_with = "serialize_pattern")]
    pub identity_note_pattern: Regex,

    /// Every modifier the descriptor declared, including rule-only ones.
    pub modifiers: ModifierSet,

    /// The compact ID the variant was declared with, if any.
    #[serde(rename = "newID", skip_serializing_if = "Option::is_none")]
    pub new_id: Option<String>,
}

impl Variant {
    /// Whether the descriptor declared a modifier.
    #[must_use]
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    /// Whether the variant has START cards.
    #[must_use]
    pub fn has_start_cards(&self, start_card_rank: Rank) -> bool {
        self.ranks.contains(&start_card_rank)
    }

    /// Whether a note names a card identity in this variant.
    #[must_use]
    pub fn is_identity_note(&self, note: &str) -> bool {
        self.identity_note_pattern.is_match(note.trim())
    }

    /// The special rank as an index, `-1` meaning none.
    #[must_use]
    pub fn special_rank_index(&self) -> i32 {
        self.special_rank.map_or(NO_SPECIAL_RANK, i32::from)
    }

    /// Look up a suit's abbreviation by position.
    #[must_use]
    pub fn suit_abbreviation(&self, suit_index: usize) -> Option<&str> {
        self.suit_abbreviations.get(suit_index).map(String::as_str)
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.id == other.id
    }
}

impl Eq for Variant {}

fn serialize_special_rank<S: Serializer>(rank: &Option<Rank>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32(rank.map_or(NO_SPECIAL_RANK, i32::from))
}

fn serialize_pattern<S: Serializer>(pattern: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(pattern.as_str())
}
