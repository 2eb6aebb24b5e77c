//! Character table, keyed by character ID.

use rustc_hash::FxHashMap;

use crate::core::Character;
use crate::error::TableError;

/// Read-only table of characters.
#[derive(Clone, Debug, Default)]
pub struct CharacterTable {
    characters: FxHashMap<u32, Character>,
}

impl CharacterTable {
    /// Build the table. Character IDs must be unique.
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Result<Self, TableError> {
        let mut table = FxHashMap::default();
        for character in characters {
            if table.contains_key(&character.id) {
                return Err(TableError::DuplicateCharacter(character.id));
            }
            table.insert(character.id, character);
        }
        Ok(Self { characters: table })
    }

    /// Build the table from a JSON array of characters.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let characters: Vec<Character> =
            serde_json::from_str(json).map_err(|source| TableError::Json {
                table: "characters",
                source,
            })?;
        let table = Self::new(characters)?;
        tracing::info!(count = table.len(), "loaded character table");
        Ok(table)
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Character> {
        self.characters.get(&id)
    }

    /// Find a character by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.values().find(|c| c.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = CharacterTable::new(vec![
            Character::new(0, "Fuming", "Can only clue numbers and [random color]"),
            Character::new(1, "Dumbfounded", "Can only clue colors and [random number]"),
        ])
        .unwrap();

        assert_eq!(table.get(1).unwrap().name, "Dumbfounded");
        assert_eq!(table.find_by_name("Fuming").unwrap().id, 0);
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CharacterTable::new(vec![
            Character::new(4, "Conservative", "Can only give clues that touch a single card"),
            Character::new(4, "Greedy", "Can only give clues that touch 2+ cards"),
        ])
        .unwrap_err();

        assert!(matches!(err, TableError::DuplicateCharacter(4)));
    }
}
