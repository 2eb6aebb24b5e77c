//! Color table, keyed by color name.

use rustc_hash::FxHashMap;

use crate::core::Color;
use crate::error::TableError;

/// Read-only table of clue colors.
///
/// ## Example
///
/// ```
/// use hanab_variants::core::Color;
/// use hanab_variants::tables::ColorTable;
///
/// let colors = ColorTable::new(vec![Color::new("Red"), Color::new("Blue")]).unwrap();
/// assert_eq!(colors.get("Blue").unwrap().abbreviation, "B");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    colors: FxHashMap<String, Color>,
}

impl ColorTable {
    /// Build the table. Color names must be unique.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self, TableError> {
        let mut table = FxHashMap::default();
        for color in colors {
            if table.contains_key(&color.name) {
                return Err(TableError::DuplicateColor(color.name));
            }
            table.insert(color.name.clone(), color);
        }
        Ok(Self { colors: table })
    }

    /// Build the table from a JSON array of colors.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let colors: Vec<Color> = serde_json::from_str(json).map_err(|source| TableError::Json {
            table: "colors",
            source,
        })?;
        let table = Self::new(colors)?;
        tracing::info!(count = table.len(), "loaded color table");
        Ok(table)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_color_rejected() {
        let err = ColorTable::new(vec![Color::new("Red"), Color::new("Red")]).unwrap_err();
        assert!(matches!(err, TableError::DuplicateColor(name) if name == "Red"));
    }

    #[test]
    fn test_from_json() {
        let table = ColorTable::from_json(
            r##"[{"name": "Red", "abbreviation": "R", "fill": "#d9001a"}, {"name": "Black", "abbreviation": "K"}]"##,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Black").unwrap().abbreviation, "K");
        assert!(!table.contains("Teal"));
    }

    #[test]
    fn test_from_invalid_json() {
        let err = ColorTable::from_json("{").unwrap_err();
        assert!(matches!(err, TableError::Json { table: "colors", .. }));
    }
}
