//! Suit abbreviations for a variant.

use crate::core::Suit;
use crate::error::VariantError;

/// Pick one abbreviation per suit, unique within the variant.
///
/// A suit keeps its own abbreviation unless an earlier suit already took
/// it; then it falls back to the first free letter of its display name.
pub fn suit_abbreviations(variant_name: &str, suits: &[Suit]) -> Result<Vec<String>, VariantError> {
    let mut abbreviations: Vec<String> = Vec::with_capacity(suits.len());

    for suit in suits {
        let taken = |candidate: &str| abbreviations.iter().any(|a| a.eq_ignore_ascii_case(candidate));

        let abbreviation = if !suit.abbreviation.is_empty() && !taken(&suit.abbreviation) {
            Some(suit.abbreviation.clone())
        } else {
            suit.display_name
                .to_uppercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .map(String::from)
                .find(|letter| !taken(letter))
        };

        match abbreviation {
            Some(abbreviation) => abbreviations.push(abbreviation),
            None => {
                return Err(VariantError::NoSuitAbbreviation {
                    variant: variant_name.to_string(),
                    suit: suit.name.clone(),
                })
            }
        }
    }

    Ok(abbreviations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn suit(name: &str, abbreviation: &str) -> Suit {
        Suit::new(name, name, vec![Color::new(name)]).with_abbreviation(abbreviation)
    }

    #[test]
    fn test_own_abbreviations_kept() {
        let suits = [suit("Red", "R"), suit("Blue", "B")];
        assert_eq!(suit_abbreviations("A", &suits).unwrap(), vec!["R", "B"]);
    }

    #[test]
    fn test_collision_falls_back_to_name_letters() {
        let suits = [suit("Red", "R"), suit("Rainbow", "R")];
        assert_eq!(suit_abbreviations("A", &suits).unwrap(), vec!["R", "A"]);
    }

    #[test]
    fn test_reversed_suit_shares_letters() {
        let red = suit("Red", "R");
        let suits = [red.clone(), red.reversed_counterpart()];
        assert_eq!(suit_abbreviations("A", &suits).unwrap(), vec!["R", "E"]);
    }

    #[test]
    fn test_no_letter_left() {
        let suits = [suit("Ab", "A"), suit("Ba", "B"), suit("Ab Ba", "A")];
        let err = suit_abbreviations("Letters", &suits).unwrap_err();
        assert!(matches!(
            err,
            VariantError::NoSuitAbbreviation { ref variant, ref suit } if variant == "Letters" && suit == "Ab Ba"
        ));
    }
}
