//! Core value types: ranks, colors, suits, characters, configuration.
//!
//! These are the building blocks the lookup tables hold and the variant
//! compiler consumes. They carry no validation logic of their own.

pub mod rank;
pub mod color;
pub mod suit;
pub mod character;
pub mod config;

pub use rank::{
    special_clue_ranks, Rank, Ranks, DEFAULT_CARD_RANKS, DEFAULT_CLUE_RANKS, POINTS_PER_STACK,
    START_CARD_RANK,
};
pub use color::Color;
pub use suit::{Suit, SUIT_REVERSED_SUFFIX};
pub use character::Character;
pub use config::{CompilerConfig, DEFAULT_VARIANT_NAME, UP_OR_DOWN_PREFIX};
