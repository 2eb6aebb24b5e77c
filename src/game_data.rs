//! Process-wide game data, built once at startup.
//!
//! Startup has two phases. First every table and the whole variant catalog
//! compile; then the result is only read. `GameData::load` returns the first
//! error it hits, `GameData::load_or_abort` logs it and panics, so the
//! process never runs with a partially valid registry.

use crate::core::{Character, CompilerConfig, Suit};
use crate::error::{CatalogError, LookupError};
use crate::notes::{Derivations, StandardDerivations};
use crate::tables::{CharacterTable, ColorTable, SuitTable};
use crate::variants::{compile_catalog_str, NormalizeContext, Variant, VariantRegistry};

/// Raw JSON text for every table, as read by the data-loading layer.
#[derive(Clone, Copy, Debug)]
pub struct DataSources<'a> {
    pub colors: &'a str,
    pub suits: &'a str,
    pub characters: &'a str,
    pub variants: &'a str,
}

/// Every compiled table.
#[derive(Debug)]
pub struct GameData {
    config: CompilerConfig,
    colors: ColorTable,
    suits: SuitTable,
    characters: CharacterTable,
    variants: VariantRegistry,
}

impl GameData {
    /// Build every table with the standard note scheme.
    pub fn load(sources: &DataSources<'_>, config: CompilerConfig) -> Result<Self, CatalogError> {
        Self::load_with(sources, config, &StandardDerivations)
    }

    /// Build every table with a custom note scheme.
    pub fn load_with(
        sources: &DataSources<'_>,
        config: CompilerConfig,
        derivations: &dyn Derivations,
    ) -> Result<Self, CatalogError> {
        let characters = CharacterTable::from_json(sources.characters)?;
        let colors = ColorTable::from_json(sources.colors)?;
        let suits = SuitTable::from_json(sources.suits, &colors)?;

        let ctx = NormalizeContext::new(&colors, &suits, &config, derivations);
        let variants = compile_catalog_str(sources.variants, &ctx)?;

        Ok(Self {
            config,
            colors,
            suits,
            characters,
            variants,
        })
    }

    /// Build every table, aborting the process on any error.
    ///
    /// # Panics
    ///
    /// Panics with the error message if any table or variant is invalid.
    #[must_use]
    pub fn load_or_abort(sources: &DataSources<'_>, config: CompilerConfig) -> Self {
        match Self::load(sources, config) {
            Ok(data) => data,
            Err(err) => {
                tracing::error!(error = %err, severity = ?err.severity(), "failed to build game data");
                panic!("failed to build game data: {err}");
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    #[must_use]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    #[must_use]
    pub fn suits(&self) -> &SuitTable {
        &self.suits
    }

    #[must_use]
    pub fn characters(&self) -> &CharacterTable {
        &self.characters
    }

    #[must_use]
    pub fn variants(&self) -> &VariantRegistry {
        &self.variants
    }

    pub fn suit(&self, name: &str) -> Result<&Suit, LookupError> {
        self.suits.get(name).ok_or_else(|| LookupError::Suit(name.to_string()))
    }

    pub fn variant(&self, name: &str) -> Result<&Variant, LookupError> {
        self.variants.variant(name)
    }

    pub fn variant_by_id(&self, id: u32) -> Result<&Variant, LookupError> {
        self.variants.variant_by_id(id)
    }

    pub fn default_variant(&self) -> Result<&Variant, LookupError> {
        self.variants.default_variant(&self.config)
    }

    pub fn character(&self, id: u32) -> Result<&Character, LookupError> {
        self.characters.get(id).ok_or(LookupError::Character(id))
    }

    #[must_use]
    pub fn variant_exists(&self, name: &str) -> bool {
        self.variants.contains(name)
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.names()
    }
}
