//! Suit table, keyed by suit name and by short suit code.
//!
//! Suits are declared in JSON with clue colors given by name. Building the
//! table resolves those names against the color table and adds a reversed
//! counterpart (`"<name> Reversed"`) for every suit.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::core::{Color, Suit};
use crate::error::TableError;

use super::colors::ColorTable;

/// A suit as declared in the suit catalog.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitJson {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// When absent, the suit is touched by the color sharing its name (if any).
    #[serde(default)]
    pub clue_colors: Option<Vec<String>>,
    #[serde(default)]
    pub all_clue_colors: bool,
    #[serde(default)]
    pub no_clue_colors: bool,
    #[serde(default)]
    pub all_clue_ranks: bool,
    #[serde(default)]
    pub no_clue_ranks: bool,
    #[serde(default)]
    pub one_of_each: bool,
    #[serde(default)]
    pub show_suit_name: bool,
}

impl SuitJson {
    fn resolve(self, colors: &ColorTable) -> Result<Suit, TableError> {
        let clue_colors: Vec<Color> = match &self.clue_colors {
            Some(names) => names
                .iter()
                .map(|name| {
                    colors.get(name).cloned().ok_or_else(|| TableError::UnknownSuitColor {
                        suit: self.name.clone(),
                        color: name.clone(),
                    })
                })
                .collect::<Result<_, _>>()?,
            None => colors.get(&self.name).cloned().into_iter().collect(),
        };

        let mut suit = Suit::new(self.name, self.id, clue_colors);
        if let Some(abbreviation) = self.abbreviation {
            suit.abbreviation = abbreviation;
        }
        if let Some(display_name) = self.display_name {
            suit.display_name = display_name;
        }
        suit.all_clue_colors = self.all_clue_colors;
        suit.no_clue_colors = self.no_clue_colors;
        suit.all_clue_ranks = self.all_clue_ranks;
        suit.no_clue_ranks = self.no_clue_ranks;
        suit.one_of_each = self.one_of_each;
        suit.show_suit_name = self.show_suit_name;
        Ok(suit)
    }
}

/// Read-only table of suits.
///
/// Lookup by name serves the JSON path; lookup by short code serves the
/// compact-ID decoder. Reversed counterparts are reachable by name only.
#[derive(Clone, Debug, Default)]
pub struct SuitTable {
    by_name: FxHashMap<String, Suit>,
    /// Short code -> name of the non-reversed suit.
    by_id: FxHashMap<String, String>,
}

impl SuitTable {
    /// Build the table from resolved suits.
    ///
    /// Names and short codes must be unique. Every non-reversed suit also
    /// gets a reversed counterpart.
    pub fn new(suits: impl IntoIterator<Item = Suit>) -> Result<Self, TableError> {
        let mut table = Self::default();
        for suit in suits {
            if suit.reversed {
                table.insert(suit)?;
                continue;
            }

            if let Some(existing) = table.by_id.get(&suit.id) {
                return Err(TableError::DuplicateSuitId {
                    id: suit.id.clone(),
                    first: existing.clone(),
                    second: suit.name.clone(),
                });
            }
            table.by_id.insert(suit.id.clone(), suit.name.clone());

            let reversed = suit.reversed_counterpart();
            table.insert(suit)?;
            table.insert(reversed)?;
        }
        Ok(table)
    }

    /// Build the table from a JSON array of suits, resolving clue colors.
    pub fn from_json(json: &str, colors: &ColorTable) -> Result<Self, TableError> {
        let declared: Vec<SuitJson> = serde_json::from_str(json).map_err(|source| TableError::Json {
            table: "suits",
            source,
        })?;
        let suits = declared
            .into_iter()
            .map(|suit| suit.resolve(colors))
            .collect::<Result<Vec<_>, _>>()?;
        let table = Self::new(suits)?;
        tracing::info!(count = table.len(), "loaded suit table");
        Ok(table)
    }

    fn insert(&mut self, suit: Suit) -> Result<(), TableError> {
        if self.by_name.contains_key(&suit.name) {
            return Err(TableError::DuplicateSuit(suit.name));
        }
        self.by_name.insert(suit.name.clone(), suit);
        Ok(())
    }

    /// Get a suit by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Suit> {
        self.by_name.get(name)
    }

    /// Get a suit by its short code.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Suit> {
        self.by_id.get(id).and_then(|name| self.by_name.get(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of suits, reversed counterparts included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suit> {
        self.by_name.values()
    }
}
