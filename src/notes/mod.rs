//! Derived note data: suit abbreviations and identity note patterns.
//!
//! The variant compiler depends on these through the [`Derivations`] trait
//! so that a different abbreviation or note scheme can be plugged in
//! without touching compilation. [`StandardDerivations`] is the scheme used
//! by default.

pub mod abbreviations;
pub mod pattern;

use crate::core::{Rank, Suit};
use crate::error::VariantError;

/// Pure derivations the variant compiler needs from the note system.
pub trait Derivations {
    /// One abbreviation per suit, in suit order.
    fn suit_abbreviations(&self, variant_name: &str, suits: &[Suit]) -> Result<Vec<String>, VariantError>;

    /// Regular expression source that matches identity notes for the variant.
    fn identity_note_pattern(
        &self,
        suits: &[Suit],
        ranks: &[Rank],
        abbreviations: &[String],
        is_up_or_down: bool,
        start_card_rank: Rank,
    ) -> String;
}

/// The default note scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardDerivations;

impl Derivations for StandardDerivations {
    fn suit_abbreviations(&self, variant_name: &str, suits: &[Suit]) -> Result<Vec<String>, VariantError> {
        abbreviations::suit_abbreviations(variant_name, suits)
    }

    fn identity_note_pattern(
        &self,
        suits: &[Suit],
        ranks: &[Rank],
        abbreviations: &[String],
        is_up_or_down: bool,
        start_card_rank: Rank,
    ) -> String {
        pattern::identity_note_pattern(suits, ranks, abbreviations, is_up_or_down, start_card_rank)
    }
}
