//! Card ranks and the fixed rank sequences every variant starts from.

use smallvec::SmallVec;

/// A card rank. Ordinary ranks are 1 through 5; the "START" card of the
/// Up or Down variants uses [`START_CARD_RANK`].
pub type Rank = u8;

/// A short sequence of ranks. Six fits every variant without spilling.
pub type Ranks = SmallVec<[Rank; 6]>;

/// The ranks that the cards of each suit have by default.
pub const DEFAULT_CARD_RANKS: [Rank; 5] = [1, 2, 3, 4, 5];

/// The ranks that can be clued by default.
pub const DEFAULT_CLUE_RANKS: [Rank; 5] = [1, 2, 3, 4, 5];

/// The rank value used for START cards.
pub const START_CARD_RANK: Rank = 7;

/// Points scored by a completed stack.
pub const POINTS_PER_STACK: u32 = 5;

/// Clue ranks for a variant with a special rank: the default clue ranks
/// without the special one.
///
/// ```
/// use hanab_variants::core::special_clue_ranks;
///
/// assert_eq!(special_clue_ranks(5).as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(special_clue_ranks(1).as_slice(), &[2, 3, 4, 5]);
/// ```
#[must_use]
pub fn special_clue_ranks(special_rank: Rank) -> Ranks {
    DEFAULT_CLUE_RANKS
        .iter()
        .copied()
        .filter(|&rank| rank != special_rank)
        .collect()
}
