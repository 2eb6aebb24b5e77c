//! # hanab-variants
//!
//! Compiles card-game variant declarations into validated, fully derived
//! variant records.
//!
//! ## Design Principles
//!
//! 1. **Two Inputs, One Shape**: Verbose catalog JSON and terse compact IDs
//!    (`R+Y+G+B+P:R5`) both become a `VariantJson` descriptor, and a single
//!    normalizer turns descriptors into `Variant` records.
//!
//! 2. **Presence Means True**: Optional rule flags are either absent or
//!    `true`. A flag written as `false` is an authoring mistake and rejected.
//!
//! 3. **Compile Once, Read Forever**: The catalog compiles eagerly at
//!    startup. Any invalid variant aborts compilation; the registry is
//!    immutable afterwards.
//!
//! ## Modules
//!
//! - `core`: Ranks, colors, suits, characters, compiler configuration
//! - `tables`: Read-only color, suit, and character lookup tables
//! - `variants`: Descriptors, compact-ID decoding, normalization, registry
//! - `notes`: Suit abbreviations and identity note patterns
//! - `game_data`: Two-phase startup over all tables
//! - `error`: Error types and severities

pub mod core;
pub mod error;
pub mod tables;
pub mod notes;
pub mod variants;
pub mod game_data;

// Re-export commonly used types
pub use crate::core::{
    Character, Color, CompilerConfig, Rank, Ranks, Suit,
    DEFAULT_CARD_RANKS, DEFAULT_CLUE_RANKS, START_CARD_RANK, SUIT_REVERSED_SUFFIX,
};

pub use crate::error::{CatalogError, DecodeError, LookupError, Severity, TableError, VariantError};

pub use crate::tables::{CharacterTable, ColorTable, SuitTable};

pub use crate::notes::{Derivations, StandardDerivations};

pub use crate::variants::{
    compile_catalog, compile_catalog_str, compile_compact, compile_variant, decode_compact_id,
    normalize, Modifier, ModifierSet, NormalizeContext, Variant, VariantJson, VariantRegistry,
};

pub use crate::game_data::{DataSources, GameData};
