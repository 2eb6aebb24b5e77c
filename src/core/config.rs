//! Compiler configuration.
//!
//! The variant compiler reads a handful of game constants rather than
//! hardcoding them:
//! - the rank value of START cards
//! - the name prefix that marks the Up or Down variants
//! - the name of the default variant
//!
//! It also switches on the optional whole-catalog checks. Points per stack
//! are not configurable: max score is always suit count times
//! [`POINTS_PER_STACK`](super::rank::POINTS_PER_STACK).

use serde::{Deserialize, Serialize};

use super::rank::{Rank, START_CARD_RANK};

/// Name of the variant with no special rules.
pub const DEFAULT_VARIANT_NAME: &str = "No Variant";

/// Variants whose names start with this prefix have START cards.
pub const UP_OR_DOWN_PREFIX: &str = "Up or Down";

/// Configuration for compiling variants.
///
/// ## Example
///
/// ```
/// use hanab_variants::core::CompilerConfig;
///
/// let config = CompilerConfig::default().with_start_card_rank(6);
/// assert_eq!(config.start_card_rank, 6);
/// assert!(config.is_up_or_down("Up or Down (6 Suits)"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    /// Rank value appended to the ranks of Up or Down variants.
    pub start_card_rank: Rank,

    /// Name prefix that triggers START cards.
    pub up_or_down_prefix: String,

    /// Name of the variant returned by `default_variant` lookups.
    pub default_variant_name: String,

    /// Fail catalog compilation when the default variant is missing.
    pub require_default_variant: bool,

    /// Fail catalog compilation when variant IDs skip a number.
    pub require_sequential_ids: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            start_card_rank: START_CARD_RANK,
            up_or_down_prefix: UP_OR_DOWN_PREFIX.to_string(),
            default_variant_name: DEFAULT_VARIANT_NAME.to_string(),
            require_default_variant: false,
            require_sequential_ids: false,
        }
    }
}

impl CompilerConfig {
    /// Set the START card rank.
    #[must_use]
    pub fn with_start_card_rank(mut self, rank: Rank) -> Self {
        self.start_card_rank = rank;
        self
    }

    /// Set the Up or Down name prefix.
    #[must_use]
    pub fn with_up_or_down_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.up_or_down_prefix = prefix.into();
        self
    }

    /// Set the default variant name.
    #[must_use]
    pub fn with_default_variant(mut self, name: impl Into<String>) -> Self {
        self.default_variant_name = name.into();
        self
    }

    /// Require the default variant in every compiled catalog.
    #[must_use]
    pub fn require_default_variant(mut self) -> Self {
        self.require_default_variant = true;
        self
    }

    /// Require variant IDs to run from 0 without gaps.
    #[must_use]
    pub fn require_sequential_ids(mut self) -> Self {
        self.require_sequential_ids = true;
        self
    }

    /// Whether a variant name marks an Up or Down variant.
    #[must_use]
    pub fn is_up_or_down(&self, variant_name: &str) -> bool {
        variant_name.starts_with(&self.up_or_down_prefix)
    }
}
