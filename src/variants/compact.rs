//! Compact variant IDs.
//!
//! A compact ID is a suit list followed by modifier codes:
//!
//! ```text
//! <suit>(+<suit>)*(:<modifier>)*
//! <suit> := <suit code>(/<suit modifier>)*
//! ```
//!
//! For example `R+Y+G+B+P:R5` is Rainbow-Fives and `R/R+B:UD` is Up or Down
//! with a reversed red suit. Suit codes resolve against the suit table's
//! short codes. The only suit modifier is `R` (reversed).
//!
//! Modifier codes are data: each code maps to a list of [`Effect`]s applied
//! in order to the descriptor being built.

use crate::core::{special_clue_ranks, Rank, Ranks, SUIT_REVERSED_SUFFIX};
use crate::error::DecodeError;
use crate::tables::SuitTable;

use super::descriptor::VariantJson;
use super::modifier::Modifier;

pub const VARIANT_DELIMITER: char = ':';
pub const SUIT_DELIMITER: char = '+';
pub const SUIT_MODIFIER_DELIMITER: char = '/';
pub const REVERSE_MODIFIER: &str = "R";

const SUIT_MODIFIERS: &[&str] = &[REVERSE_MODIFIER];

/// One change a modifier code makes to a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Mark a modifier as present.
    Set(Modifier),
    /// Take the special rank from the code's second character.
    SpecialRank,
    /// Clue ranks become the default clue ranks minus the special rank.
    ExcludeSpecialRank,
    /// No color can be clued.
    NoClueColors,
    /// Clue ranks become exactly these.
    ClueRanks(&'static [Rank]),
}

use Effect::{ClueRanks, ExcludeSpecialRank, NoClueColors, Set, SpecialRank};

/// Plain modifier codes, matched exactly.
pub static MODIFIER_CODES: &[(&str, &[Effect])] = &[
    // Color Blind
    ("CB", &[Set(Modifier::ColorCluesTouchNothing)]),
    // Number Blind
    ("NB", &[Set(Modifier::RankCluesTouchNothing)]),
    // Totally Blind
    (
        "TB",
        &[
            Set(Modifier::ColorCluesTouchNothing),
            Set(Modifier::RankCluesTouchNothing),
        ],
    ),
    // Color Mute
    ("CM", &[NoClueColors]),
    // Number Mute
    ("NM", &[ClueRanks(&[])]),
    ("AC", &[Set(Modifier::AlternatingClues)]),
    ("CS", &[Set(Modifier::ClueStarved)]),
    // Cow & Pig
    ("CP", &[Set(Modifier::CowPig)]),
    ("Du", &[Set(Modifier::Duck)]),
    ("TH", &[Set(Modifier::ThrowItInHole)]),
    ("UD", &[Set(Modifier::UpOrDown), Set(Modifier::ShowSuitNames)]),
    ("Sy", &[Set(Modifier::Synesthesia), ClueRanks(&[])]),
    ("C4", &[Set(Modifier::CriticalFours)]),
    ("OE", &[Set(Modifier::OddsAndEvens), ClueRanks(&[1, 2])]),
];

/// Special-rank families, keyed by the code's first character. The second
/// character is the special rank.
pub static SPECIAL_RANK_CODES: &[(char, &[Effect])] = &[
    // Rainbow
    ('R', &[SpecialRank, Set(Modifier::SpecialAllClueColors)]),
    // Pink
    (
        'P',
        &[SpecialRank, Set(Modifier::SpecialAllClueRanks), ExcludeSpecialRank],
    ),
    // White
    ('W', &[SpecialRank, Set(Modifier::SpecialNoClueColors)]),
    // Brown
    (
        'B',
        &[SpecialRank, Set(Modifier::SpecialNoClueRanks), ExcludeSpecialRank],
    ),
    // Omni
    (
        'O',
        &[
            SpecialRank,
            Set(Modifier::SpecialAllClueColors),
            Set(Modifier::SpecialAllClueRanks),
            ExcludeSpecialRank,
        ],
    ),
    // Null
    (
        'N',
        &[
            SpecialRank,
            Set(Modifier::SpecialNoClueColors),
            Set(Modifier::SpecialNoClueRanks),
            ExcludeSpecialRank,
        ],
    ),
    // Muddy Rainbow
    (
        'M',
        &[
            SpecialRank,
            Set(Modifier::SpecialAllClueColors),
            Set(Modifier::SpecialNoClueRanks),
            ExcludeSpecialRank,
        ],
    ),
    // Light Pink
    (
        'L',
        &[
            SpecialRank,
            Set(Modifier::SpecialNoClueColors),
            Set(Modifier::SpecialAllClueRanks),
            ExcludeSpecialRank,
        ],
    ),
    // Deceptive
    (
        'D',
        &[SpecialRank, Set(Modifier::SpecialDeceptive), ExcludeSpecialRank],
    ),
];

/// Find the effects of a modifier code.
///
/// Plain codes win over special-rank families, so `NB`, `NM`, `OE` and `Du`
/// are never read as Null, Omni or Deceptive.
#[must_use]
pub fn lookup_modifier(code: &str) -> Option<&'static [Effect]> {
    if let Some(&(_, effects)) = MODIFIER_CODES.iter().find(|(c, _)| *c == code) {
        return Some(effects);
    }

    let mut chars = code.chars();
    let (Some(family), Some(_), None) = (chars.next(), chars.next(), chars.next()) else {
        return None;
    };
    SPECIAL_RANK_CODES
        .iter()
        .find(|(f, _)| *f == family)
        .map(|&(_, effects)| effects)
}

/// Decode a compact ID into a descriptor.
///
/// The descriptor has an empty name and no ID; the caller names it. Suit
/// problems and malformed codes are fatal, an unknown modifier code is a
/// validation error. On error nothing is returned, so no partially decoded
/// descriptor is ever visible.
///
/// ## Example
///
/// ```
/// use hanab_variants::core::{Color, Suit};
/// use hanab_variants::tables::SuitTable;
/// use hanab_variants::variants::{decode_compact_id, Modifier};
///
/// let suits = SuitTable::new(vec![Suit::new("Blue", "B", vec![Color::new("Blue")])]).unwrap();
/// let descriptor = decode_compact_id("B:P5", &suits).unwrap();
///
/// assert_eq!(descriptor.special_rank, Some(5));
/// assert!(descriptor.has(Modifier::SpecialAllClueRanks));
/// assert_eq!(descriptor.clue_ranks.unwrap().as_slice(), &[1, 2, 3, 4]);
/// ```
pub fn decode_compact_id(compact_id: &str, suits: &SuitTable) -> Result<VariantJson, DecodeError> {
    let mut segments = compact_id.split(VARIANT_DELIMITER);
    let suit_segment = segments.next().unwrap_or_default();

    let mut descriptor = VariantJson {
        new_id: Some(compact_id.to_string()),
        ..VariantJson::default()
    };

    for token in suit_segment.split(SUIT_DELIMITER) {
        let (name, show_suit_name) = decode_suit_token(token, compact_id, suits)?;
        descriptor.suits.push(name);
        if show_suit_name {
            descriptor.modifiers.insert(Modifier::ShowSuitNames);
        }
    }

    for code in segments {
        apply_modifier(&mut descriptor, code, compact_id)?;
    }

    tracing::trace!(compact_id, suits = descriptor.suits.len(), "decoded compact ID");
    Ok(descriptor)
}

/// Resolve one suit token to a suit name, returning whether the suit always
/// shows its name.
fn decode_suit_token(
    token: &str,
    compact_id: &str,
    suits: &SuitTable,
) -> Result<(String, bool), DecodeError> {
    let mut parts = token.split(SUIT_MODIFIER_DELIMITER);
    let suit_id = parts.next().unwrap_or_default();
    if suit_id.is_empty() {
        return Err(DecodeError::MalformedSuitToken {
            token: token.to_string(),
            compact_id: compact_id.to_string(),
        });
    }

    let suit = suits.get_by_id(suit_id).ok_or_else(|| DecodeError::UnknownSuitId {
        suit_id: suit_id.to_string(),
        compact_id: compact_id.to_string(),
    })?;

    let mut reversed = false;
    for modifier in parts {
        if !SUIT_MODIFIERS.contains(&modifier) {
            return Err(DecodeError::UnknownSuitModifier {
                suit: suit.name.clone(),
                modifier: modifier.to_string(),
                token: token.to_string(),
            });
        }
        reversed |= modifier == REVERSE_MODIFIER;
    }

    let name = if reversed {
        format!("{}{}", suit.name, SUIT_REVERSED_SUFFIX)
    } else {
        suit.name.clone()
    };
    Ok((name, suit.show_suit_name))
}

fn apply_modifier(
    descriptor: &mut VariantJson,
    code: &str,
    compact_id: &str,
) -> Result<(), DecodeError> {
    if code.chars().count() < 2 {
        return Err(DecodeError::MalformedModifier {
            modifier: code.to_string(),
            compact_id: compact_id.to_string(),
        });
    }

    let effects = lookup_modifier(code).ok_or_else(|| DecodeError::UnknownModifier {
        modifier: code.to_string(),
        compact_id: compact_id.to_string(),
    })?;

    // A non-digit second character reads as 0, which is rejected below.
    let digit = code
        .chars()
        .nth(1)
        .and_then(|c| c.to_digit(10))
        .map_or(0, |d| d as i64);

    for effect in effects {
        match *effect {
            Effect::Set(modifier) => descriptor.modifiers.insert(modifier),
            Effect::SpecialRank => descriptor.special_rank = Some(digit),
            Effect::ExcludeSpecialRank => {
                let rank = descriptor.special_rank.unwrap_or_default();
                descriptor.clue_ranks = Some(special_clue_ranks(rank as Rank));
            }
            Effect::NoClueColors => descriptor.clue_colors = Some(Vec::new()),
            Effect::ClueRanks(ranks) => {
                descriptor.clue_ranks = Some(ranks.iter().copied().collect::<Ranks>());
            }
        }
    }

    if descriptor.special_rank == Some(0) {
        return Err(DecodeError::MissingSpecialRank {
            modifier: code.to_string(),
            compact_id: compact_id.to_string(),
        });
    }
    Ok(())
}
