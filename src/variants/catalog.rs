//! Whole-catalog compilation.
//!
//! The catalog compiles eagerly and all at once. The first invalid variant
//! stops compilation and no registry is returned, so a partially valid
//! registry never exists.
//!
//! Two whole-catalog checks are opt-in through `CompilerConfig`: the default
//! variant must be present, and variant IDs must run from 0 without gaps.

use serde_json::Value;

use crate::core::CompilerConfig;
use crate::error::CatalogError;

use super::compact::decode_compact_id;
use super::normalize::{compile_variant, normalize, NormalizeContext};
use super::record::Variant;
use super::registry::VariantRegistry;

/// Compile every element of a variant catalog into a registry.
///
/// Runs the whole-catalog checks the config enables once every variant has
/// compiled.
pub fn compile_catalog(
    variants: &[Value],
    ctx: &NormalizeContext<'_>,
) -> Result<VariantRegistry, CatalogError> {
    if variants.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut registry = VariantRegistry::new();
    for (index, value) in variants.iter().enumerate() {
        let variant = compile_variant(value, ctx).map_err(|source| CatalogError::Variant { index, source })?;
        registry.register(variant)?;
    }

    check_catalog(&registry, ctx.config)?;

    tracing::info!(count = registry.len(), "compiled variant catalog");
    Ok(registry)
}

fn check_catalog(registry: &VariantRegistry, config: &CompilerConfig) -> Result<(), CatalogError> {
    if config.require_sequential_ids {
        // Unique IDs plus no gaps below the count means exactly 0..count.
        let count = u32::try_from(registry.len()).unwrap_or(u32::MAX);
        if let Some(missing) = (0..count).find(|&id| registry.get_by_id(id).is_none()) {
            return Err(CatalogError::SkippedId(missing));
        }
    }

    if config.require_default_variant && !registry.contains(&config.default_variant_name) {
        return Err(CatalogError::MissingDefaultVariant(config.default_variant_name.clone()));
    }
    Ok(())
}

/// Compile a catalog given as JSON text (an array of variant objects).
pub fn compile_catalog_str(json: &str, ctx: &NormalizeContext<'_>) -> Result<VariantRegistry, CatalogError> {
    let variants: Vec<Value> = serde_json::from_str(json)?;
    compile_catalog(&variants, ctx)
}

/// Decode a compact ID, name it, and compile it.
///
/// ## Example
///
/// ```
/// use hanab_variants::core::{Color, CompilerConfig, Suit};
/// use hanab_variants::notes::StandardDerivations;
/// use hanab_variants::tables::{ColorTable, SuitTable};
/// use hanab_variants::variants::{compile_compact, NormalizeContext};
///
/// let colors = ColorTable::new(vec![Color::new("Red")]).unwrap();
/// let suits = SuitTable::new(vec![Suit::new("Red", "R", vec![Color::new("Red")])]).unwrap();
/// let config = CompilerConfig::default();
/// let ctx = NormalizeContext::new(&colors, &suits, &config, &StandardDerivations);
///
/// let variant = compile_compact("R/R", "Reversed Red", 12, &ctx).unwrap();
/// assert_eq!(variant.suits[0].name, "Red Reversed");
/// assert!(variant.show_suit_names);
/// ```
pub fn compile_compact(
    compact_id: &str,
    name: &str,
    id: u32,
    ctx: &NormalizeContext<'_>,
) -> Result<Variant, CatalogError> {
    let descriptor = decode_compact_id(compact_id, ctx.suits)?
        .with_name(name)
        .with_id(i64::from(id));
    normalize(&descriptor, ctx).map_err(|source| CatalogError::Compact {
        compact_id: compact_id.to_string(),
        source,
    })
}
