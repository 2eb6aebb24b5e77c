//! Identity note patterns.
//!
//! Players write notes like `r3`, `3 red`, `b`, or `4`. The pattern for a
//! variant accepts a suit, a rank, or both in either order, where a suit is
//! its abbreviation or display name and a rank is a digit. START cards in
//! Up or Down variants are written `s` or `start`.

use crate::core::{Rank, Suit};

/// Build the identity note pattern for a variant.
///
/// The result is a regular expression source string. Suit names are
/// escaped; matching is case-insensitive.
#[must_use]
pub fn identity_note_pattern(
    suits: &[Suit],
    ranks: &[Rank],
    abbreviations: &[String],
    is_up_or_down: bool,
    start_card_rank: Rank,
) -> String {
    let suit_pattern = suit_alternation(suits, abbreviations);
    let rank_pattern = rank_alternation(ranks, is_up_or_down, start_card_rank);

    format!(
        "(?i)^(?:{suit_pattern} ?{rank_pattern}|{rank_pattern} ?{suit_pattern}|{suit_pattern}|{rank_pattern})$"
    )
}

fn suit_alternation(suits: &[Suit], abbreviations: &[String]) -> String {
    let alternatives: Vec<String> = suits
        .iter()
        .zip(abbreviations)
        .flat_map(|(suit, abbreviation)| {
            [
                regex::escape(&abbreviation.to_lowercase()),
                regex::escape(&suit.display_name.to_lowercase()),
            ]
        })
        .collect();
    format!("(?:{})", alternatives.join("|"))
}

fn rank_alternation(ranks: &[Rank], is_up_or_down: bool, start_card_rank: Rank) -> String {
    let alternatives: Vec<String> = ranks
        .iter()
        .map(|&rank| {
            if is_up_or_down && rank == start_card_rank {
                "s|start".to_string()
            } else {
                rank.to_string()
            }
        })
        .collect();
    format!("(?:{})", alternatives.join("|"))
}
