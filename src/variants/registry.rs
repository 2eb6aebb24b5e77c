//! Variant registry for lookup by name and by ID.
//!
//! The `VariantRegistry` owns every compiled variant for the life of the
//! process. It is filled once while the catalog compiles and only read
//! afterwards.

use rustc_hash::FxHashMap;

use crate::core::CompilerConfig;
use crate::error::{CatalogError, LookupError};

use super::record::Variant;

/// Registry of compiled variants.
///
/// Variants keep catalog order; `names()` and `iter()` return them in the
/// order they were registered.
///
/// ## Example
///
/// ```
/// use hanab_variants::core::{Color, CompilerConfig, Suit};
/// use hanab_variants::notes::StandardDerivations;
/// use hanab_variants::tables::{ColorTable, SuitTable};
/// use hanab_variants::variants::{normalize, NormalizeContext, VariantJson, VariantRegistry};
///
/// let colors = ColorTable::new(vec![Color::new("Red")]).unwrap();
/// let suits = SuitTable::new(vec![Suit::new("Red", "R", vec![Color::new("Red")])]).unwrap();
/// let config = CompilerConfig::default();
/// let ctx = NormalizeContext::new(&colors, &suits, &config, &StandardDerivations);
///
/// let mut registry = VariantRegistry::new();
/// let descriptor = VariantJson::new("Red Only", 0, vec!["Red".to_string()]);
/// registry.register(normalize(&descriptor, &ctx).unwrap()).unwrap();
///
/// assert_eq!(registry.get_by_id(0).unwrap().name, "Red Only");
/// assert!(registry.contains("Red Only"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
    by_name: FxHashMap<String, usize>,
    by_id: FxHashMap<u32, usize>,
}

impl VariantRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compiled variant.
    ///
    /// Names and IDs must both be unique.
    pub fn register(&mut self, variant: Variant) -> Result<(), CatalogError> {
        if self.by_name.contains_key(&variant.name) {
            return Err(CatalogError::DuplicateName(variant.name));
        }
        if let Some(&existing) = self.by_id.get(&variant.id) {
            return Err(CatalogError::DuplicateId {
                id: variant.id,
                first: self.variants[existing].name.clone(),
                second: variant.name,
            });
        }

        let index = self.variants.len();
        self.by_name.insert(variant.name.clone(), index);
        self.by_id.insert(variant.id, index);
        self.variants.push(variant);
        Ok(())
    }

    /// Get a variant by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.by_name.get(name).map(|&index| &self.variants[index])
    }

    /// Get a variant by ID.
    #[must_use]
    pub fn get_by_id(&self, id: u32) -> Option<&Variant> {
        self.by_id.get(&id).map(|&index| &self.variants[index])
    }

    /// Get a variant by name, or an error naming it.
    pub fn variant(&self, name: &str) -> Result<&Variant, LookupError> {
        self.get(name).ok_or_else(|| LookupError::Variant(name.to_string()))
    }

    /// Get a variant by ID, or an error naming it.
    pub fn variant_by_id(&self, id: u32) -> Result<&Variant, LookupError> {
        self.get_by_id(id).ok_or(LookupError::VariantId(id))
    }

    /// Get a variant by name, panicking if not found.
    ///
    /// Use for names fixed in code that the catalog is known to contain.
    #[must_use]
    pub fn get_unchecked(&self, name: &str) -> &Variant {
        self.get(name).expect("Variant not found in registry")
    }

    /// The configured default variant.
    pub fn default_variant(&self, config: &CompilerConfig) -> Result<&Variant, LookupError> {
        self.variant(&config.default_variant_name)
    }

    /// Check if a variant name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All variant names, in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.name.as_str())
    }

    /// Get the number of registered variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate over all variants, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    /// Find variants matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Variant>
    where
        F: Fn(&Variant) -> bool,
    {
        self.variants.iter().filter(move |v| predicate(v))
    }
}
