//! Variant compiler: descriptors, compact IDs, normalization, registry.
//!
//! ## Key Types
//!
//! - `VariantJson`: a variant declaration, from catalog JSON or a compact ID
//! - `Modifier` / `ModifierSet`: presence-means-true rule flags
//! - `Variant`: the compiled, immutable variant record
//! - `VariantRegistry`: compiled variants by name and by ID
//!
//! ## Flow
//!
//! Catalog JSON goes through `VariantJson::from_value`, compact IDs through
//! `decode_compact_id`. Both produce a `VariantJson` that `normalize` turns
//! into a `Variant`. `compile_catalog` does this for a whole catalog and
//! fills a `VariantRegistry`.

pub mod modifier;
pub mod descriptor;
pub mod compact;
pub mod record;
pub mod normalize;
pub mod registry;
pub mod catalog;

pub use modifier::{Modifier, ModifierSet};
pub use descriptor::VariantJson;
pub use compact::{decode_compact_id, lookup_modifier, Effect};
pub use record::{Variant, NO_SPECIAL_RANK};
pub use normalize::{compile_variant, normalize, NormalizeContext};
pub use registry::VariantRegistry;
pub use catalog::{compile_catalog, compile_catalog_str, compile_compact};
