//! Variant descriptors: the intermediate shape both input paths produce.
//!
//! A descriptor is the raw declaration of a variant. Names in it (suits,
//! colors) are not resolved yet, and nothing is derived. The compact-ID
//! decoder builds descriptors directly; catalog JSON is read into one with
//! [`VariantJson::from_value`], which checks the shape of every field.

use serde_json::{Map, Number, Value};

use crate::core::{Rank, Ranks, DEFAULT_CLUE_RANKS};
use crate::error::VariantError;

use super::modifier::{Modifier, ModifierSet};

const UNNAMED: &str = "<unnamed>";

/// A variant declaration, before resolution and derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantJson {
    pub name: String,

    /// Absent for descriptors decoded from a compact ID.
    pub id: Option<i64>,

    /// Suit names, reversed suits carrying the reversed suffix.
    pub suits: Vec<String>,

    /// The compact ID this descriptor was decoded from.
    pub new_id: Option<String>,

    /// Explicit clue colors. `None` means "derive from the suits".
    pub clue_colors: Option<Vec<String>>,

    /// Explicit clue ranks. `None` means "the default clue ranks".
    pub clue_ranks: Option<Ranks>,

    pub special_rank: Option<i64>,

    /// Modifiers present with the value `true`.
    pub modifiers: ModifierSet,
}

impl VariantJson {
    /// Create a descriptor with a name, an ID, and suits.
    pub fn new(name: impl Into<String>, id: i64, suits: Vec<String>) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
            suits,
            ..Self::default()
        }
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the ID (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    /// Read a descriptor from one element of the variant catalog.
    ///
    /// Required fields are `name` (non-empty string), `id` (whole number
    /// from 0 to `u32::MAX`), and `suits` (non-empty array of strings). Every
    /// modifier field, if present, must be `true`. Numbers written as
    /// integral floats (`5.0`) are read as whole numbers. Unknown fields are
    /// ignored.
    pub fn from_value(value: &Value) -> Result<Self, VariantError> {
        let object = value.as_object().ok_or(VariantError::NotAnObject)?;

        let name = match object.get("name") {
            None => return Err(VariantError::MissingName),
            Some(Value::String(name)) if name.is_empty() => return Err(VariantError::EmptyName),
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(VariantError::NameNotString),
        };
        let variant = || name.clone();

        // The first variant has an ID of 0.
        let id = match object.get("id") {
            None => return Err(VariantError::MissingId { variant: variant() }),
            Some(Value::Number(id)) => {
                let id = id
                    .as_u64()
                    .or_else(|| whole_number(id).and_then(|id| u64::try_from(id).ok()))
                    .ok_or_else(|| VariantError::InvalidId { variant: variant() })?;
                let id = u32::try_from(id).map_err(|_| VariantError::IdTooLarge { variant: variant(), id })?;
                i64::from(id)
            }
            Some(_) => return Err(VariantError::InvalidId { variant: variant() }),
        };

        let suits = match object.get("suits") {
            None => return Err(VariantError::MissingSuits { variant: variant() }),
            Some(Value::Array(suits)) if suits.is_empty() => {
                return Err(VariantError::EmptySuits { variant: variant() })
            }
            Some(Value::Array(suits)) => suits
                .iter()
                .map(|suit| {
                    suit.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| VariantError::SuitNotString { variant: variant() })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(VariantError::SuitsNotArray { variant: variant() }),
        };

        let new_id = match object.get("newID") {
            None => None,
            Some(Value::String(new_id)) => Some(new_id.clone()),
            Some(_) => return Err(VariantError::NewIdNotString { variant: variant() }),
        };

        let clue_colors = match object.get("clueColors") {
            None => None,
            Some(Value::Array(colors)) => Some(
                colors
                    .iter()
                    .map(|color| {
                        color
                            .as_str()
                            .map(str::to_string)
                            .ok_or_else(|| VariantError::ClueColorNotString { variant: variant() })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(_) => return Err(VariantError::ClueColorsNotArray { variant: variant() }),
        };

        let clue_ranks = match object.get("clueRanks") {
            None => None,
            Some(Value::Array(ranks)) => Some(
                ranks
                    .iter()
                    .map(|rank| match rank {
                        Value::Number(number) => whole_number(number)
                            .and_then(|rank| Rank::try_from(rank).ok())
                            .filter(|rank| DEFAULT_CLUE_RANKS.contains(rank))
                            .ok_or_else(|| VariantError::ClueRankOutOfDomain {
                                variant: variant(),
                                value: number.clone(),
                            }),
                        _ => Err(VariantError::ClueRankNotNumber { variant: variant() }),
                    })
                    .collect::<Result<Ranks, _>>()?,
            ),
            Some(_) => return Err(VariantError::ClueRanksNotArray { variant: variant() }),
        };

        let special_rank = match object.get("specialRank") {
            None => None,
            Some(Value::Number(number)) => {
                let rank = whole_number(number)
                    .filter(|rank| (1..=5).contains(rank))
                    .ok_or_else(|| VariantError::SpecialRankOutOfRange {
                        variant: variant(),
                        rank: number.clone(),
                    })?;
                Some(rank)
            }
            Some(_) => return Err(VariantError::SpecialRankNotNumber { variant: variant() }),
        };

        let modifiers = read_modifiers(object, &name)?;

        Ok(Self {
            name,
            id: Some(id),
            suits,
            new_id,
            clue_colors,
            clue_ranks,
            special_rank,
            modifiers,
        })
    }

    /// Render the descriptor in catalog JSON form.
    ///
    /// Present modifiers are written as `true`; absent ones are omitted.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("name".into(), Value::from(self.name.as_str()));
        if let Some(id) = self.id {
            object.insert("id".into(), Value::from(id));
        }
        object.insert("suits".into(), Value::from(self.suits.clone()));
        if let Some(new_id) = &self.new_id {
            object.insert("newID".into(), Value::from(new_id.as_str()));
        }
        if let Some(colors) = &self.clue_colors {
            object.insert("clueColors".into(), Value::from(colors.clone()));
        }
        if let Some(ranks) = &self.clue_ranks {
            object.insert("clueRanks".into(), Value::from(ranks.to_vec()));
        }
        if let Some(rank) = self.special_rank {
            object.insert("specialRank".into(), Value::from(rank));
        }
        for modifier in self.modifiers.iter() {
            object.insert(modifier.key().into(), Value::Bool(true));
        }
        Value::Object(object)
    }

    /// The name used in error messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED
        } else {
            &self.name
        }
    }
}

/// A JSON number as a whole number. Integral floats such as `5.0` count;
/// fractions and values outside `i64` do not.
fn whole_number(number: &Number) -> Option<i64> {
    if let Some(whole) = number.as_i64() {
        return Some(whole);
    }
    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn read_modifiers(object: &Map<String, Value>, name: &str) -> Result<ModifierSet, VariantError> {
    let mut modifiers = ModifierSet::new();
    for modifier in Modifier::ALL {
        match object.get(modifier.key()) {
            None => {}
            Some(Value::Bool(true)) => modifiers.insert(modifier),
            Some(_) => {
                return Err(VariantError::FlagNotTrue {
                    variant: name.to_string(),
                    field: modifier.key(),
                })
            }
        }
    }
    Ok(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_descriptor() {
        let descriptor = VariantJson::from_value(&json!({
            "name": "No Variant",
            "id": 0,
            "suits": ["Red", "Yellow", "Green", "Blue", "Purple"]
        }))
        .unwrap();

        assert_eq!(descriptor.name, "No Variant");
        assert_eq!(descriptor.id, Some(0));
        assert_eq!(descriptor.suits.len(), 5);
        assert!(descriptor.modifiers.is_empty());
        assert_eq!(descriptor.clue_colors, None);
        assert_eq!(descriptor.special_rank, None);
    }

    #[test]
    fn test_false_flag_rejected() {
        let err = VariantJson::from_value(&json!({
            "name": "Deceptive-Ones (5 Suits)",
            "id": 1,
            "suits": ["Red"],
            "specialDeceptive": false
        }))
        .unwrap_err();

        assert!(matches!(
            err,
            VariantError::FlagNotTrue { ref variant, field: "specialDeceptive" }
                if variant == "Deceptive-Ones (5 Suits)"
        ));
    }

    #[test]
    fn test_non_bool_flag_rejected() {
        let err = VariantJson::from_value(&json!({
            "name": "Funnels",
            "id": 2,
            "suits": ["Red"],
            "funnels": "yes"
        }))
        .unwrap_err();

        assert!(matches!(err, VariantError::FlagNotTrue { field: "funnels", .. }));
    }

    #[test]
    fn test_required_fields() {
        assert!(matches!(
            VariantJson::from_value(&json!([])),
            Err(VariantError::NotAnObject)
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"id": 0, "suits": ["Red"]})),
            Err(VariantError::MissingName)
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": 3, "id": 0, "suits": ["Red"]})),
            Err(VariantError::NameNotString)
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "", "id": 0, "suits": ["Red"]})),
            Err(VariantError::EmptyName)
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "A", "suits": ["Red"]})),
            Err(VariantError::MissingId { .. })
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "A", "id": -1, "suits": ["Red"]})),
            Err(VariantError::InvalidId { .. })
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "A", "id": 0})),
            Err(VariantError::MissingSuits { .. })
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "A", "id": 0, "suits": "Red"})),
            Err(VariantError::SuitsNotArray { .. })
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "A", "id": 0, "suits": []})),
            Err(VariantError::EmptySuits { .. })
        ));
        assert!(matches!(
            VariantJson::from_value(&json!({"name": "A", "id": 0, "suits": [1]})),
            Err(VariantError::SuitNotString { .. })
        ));
    }

    #[test]
    fn test_optional_field_shapes() {
        let base = |key: &str, value: Value| {
            let mut object = json!({"name": "A", "id": 0, "suits": ["Red"]});
            object[key] = value;
            VariantJson::from_value(&object)
        };

        assert!(matches!(
            base("clueColors", json!("Red")),
            Err(VariantError::ClueColorsNotArray { .. })
        ));
        assert!(matches!(
            base("clueColors", json!([1])),
            Err(VariantError::ClueColorNotString { .. })
        ));
        assert!(matches!(
            base("clueRanks", json!({})),
            Err(VariantError::ClueRanksNotArray { .. })
        ));
        assert!(matches!(
            base("clueRanks", json!(["1"])),
            Err(VariantError::ClueRankNotNumber { .. })
        ));
        assert!(matches!(
            base("specialRank", json!("5")),
            Err(VariantError::SpecialRankNotNumber { .. })
        ));
        assert!(matches!(
            base("specialRank", json!(6)),
            Err(VariantError::SpecialRankOutOfRange { ref rank, .. }) if rank.as_i64() == Some(6)
        ));
        assert!(matches!(
            base("newID", json!(12)),
            Err(VariantError::NewIdNotString { .. })
        ));
    }

    #[test]
    fn test_integral_floats_accepted() {
        let descriptor = VariantJson::from_value(&json!({
            "name": "Pink-Fives",
            "id": 12.0,
            "suits": ["Red"],
            "specialRank": 5.0,
            "clueRanks": [1.0, 2.0, 3, 4.0]
        }))
        .unwrap();

        assert_eq!(descriptor.id, Some(12));
        assert_eq!(descriptor.special_rank, Some(5));
        assert_eq!(descriptor.clue_ranks.unwrap().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_numbers_outside_rank_domain() {
        let base = |key: &str, value: Value| {
            let mut object = json!({"name": "A", "id": 0, "suits": ["Red"]});
            object[key] = value;
            VariantJson::from_value(&object)
        };

        for ranks in [json!([-1]), json!([1.5]), json!([0]), json!([6]), json!([300])] {
            let err = base("clueRanks", ranks.clone()).unwrap_err();
            assert!(
                matches!(err, VariantError::ClueRankOutOfDomain { .. }),
                "{ranks} gave {err:?}"
            );
        }
        let err = base("clueRanks", json!([2, -1])).unwrap_err();
        assert!(matches!(
            err,
            VariantError::ClueRankOutOfDomain { ref value, .. } if value.as_i64() == Some(-1)
        ));

        let err = base("specialRank", json!(4.5)).unwrap_err();
        assert!(matches!(
            err,
            VariantError::SpecialRankOutOfRange { ref rank, .. } if rank.as_f64() == Some(4.5)
        ));
        assert!(err.to_string().contains("got 4.5"));
        assert!(matches!(
            base("specialRank", json!(0)),
            Err(VariantError::SpecialRankOutOfRange { .. })
        ));
    }

    #[test]
    fn test_id_limits() {
        let with_id = |id: Value| VariantJson::from_value(&json!({"name": "A", "id": id, "suits": ["Red"]}));

        assert_eq!(with_id(json!(u32::MAX)).unwrap().id, Some(i64::from(u32::MAX)));
        assert!(matches!(
            with_id(json!(5_000_000_000_u64)),
            Err(VariantError::IdTooLarge { id: 5_000_000_000, .. })
        ));
        assert!(matches!(
            with_id(json!(5.0e9)),
            Err(VariantError::IdTooLarge { id: 5_000_000_000, .. })
        ));
        assert!(matches!(with_id(json!(-1.0)), Err(VariantError::InvalidId { .. })));
        assert!(matches!(with_id(json!(1.5)), Err(VariantError::InvalidId { .. })));
        assert!(matches!(with_id(json!("3")), Err(VariantError::InvalidId { .. })));
    }

    #[test]
    fn test_to_value_renders_flags_as_true() {
        let descriptor = VariantJson::new("Duck", 4, vec!["Red".into()])
            .with_modifier(Modifier::Duck)
            .with_modifier(Modifier::ShowSuitNames);

        let value = descriptor.to_value();
        assert_eq!(value["duck"], json!(true));
        assert_eq!(value["showSuitNames"], json!(true));
        assert!(value.get("cowPig").is_none());
        assert_eq!(VariantJson::from_value(&value).unwrap(), descriptor);
    }

    #[test]
    fn test_display_name_for_unnamed() {
        let descriptor = VariantJson::default();
        assert_eq!(descriptor.display_name(), "<unnamed>");
    }
}
