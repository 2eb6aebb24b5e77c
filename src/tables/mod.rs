//! Read-only lookup tables consumed by the variant compiler.
//!
//! ## Key Types
//!
//! - `ColorTable`: clue colors by name
//! - `SuitTable`: suits by name and by short code, with reversed counterparts
//! - `CharacterTable`: characters by ID
//!
//! Tables are built once from in-memory values or JSON text and never
//! modified afterwards.

pub mod colors;
pub mod suits;
pub mod characters;

pub use colors::ColorTable;
pub use suits::{SuitJson, SuitTable};
pub use characters::CharacterTable;
