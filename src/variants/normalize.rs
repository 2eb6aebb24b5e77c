//! Variant normalization: descriptor in, compiled variant out.
//!
//! Resolution and derivation happen in a fixed order:
//! 1. suits resolve against the suit table
//! 2. card ranks, with a START rank for Up or Down variants
//! 3. clue colors, explicit or derived from the suits
//! 4. clue ranks, explicit or the defaults
//! 5. special rank and its modifiers
//! 6. the remaining presence-means-true modifiers
//! 7. suit names are always shown if any suit is reversed
//! 8. max score, corner offsets, abbreviations, note pattern

use regex::Regex;
use serde_json::Value;

use crate::core::{
    Color, CompilerConfig, Rank, Ranks, Suit, DEFAULT_CARD_RANKS, DEFAULT_CLUE_RANKS, POINTS_PER_STACK,
};
use crate::error::VariantError;
use crate::notes::Derivations;
use crate::tables::{ColorTable, SuitTable};

use super::descriptor::VariantJson;
use super::modifier::Modifier;
use super::record::Variant;

/// Everything the normalizer reads besides the descriptor.
#[derive(Clone, Copy)]
pub struct NormalizeContext<'a> {
    pub colors: &'a ColorTable,
    pub suits: &'a SuitTable,
    pub config: &'a CompilerConfig,
    pub derivations: &'a dyn Derivations,
}

impl<'a> NormalizeContext<'a> {
    pub fn new(
        colors: &'a ColorTable,
        suits: &'a SuitTable,
        config: &'a CompilerConfig,
        derivations: &'a dyn Derivations,
    ) -> Self {
        Self {
            colors,
            suits,
            config,
            derivations,
        }
    }
}

impl std::fmt::Debug for NormalizeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizeContext")
            .field("colors", &self.colors.len())
            .field("suits", &self.suits.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// Validate one catalog element and compile it.
pub fn compile_variant(value: &Value, ctx: &NormalizeContext<'_>) -> Result<Variant, VariantError> {
    let descriptor = VariantJson::from_value(value)?;
    normalize(&descriptor, ctx)
}

/// Resolve and derive a compiled variant from a descriptor.
///
/// Descriptors from [`VariantJson::from_value`] are already shape-checked;
/// descriptors built in code (for instance from a compact ID) are checked
/// here for the rules that still apply to them: a non-empty name, an ID,
/// at least one suit, and a special rank within 1 to 5.
pub fn normalize(descriptor: &VariantJson, ctx: &NormalizeContext<'_>) -> Result<Variant, VariantError> {
    if descriptor.name.is_empty() {
        return Err(VariantError::EmptyName);
    }
    let name = descriptor.name.as_str();
    let variant = || name.to_string();

    let id = match descriptor.id {
        None => return Err(VariantError::MissingId { variant: variant() }),
        Some(id) => u32::try_from(id).map_err(|_| match u64::try_from(id) {
            Ok(id) => VariantError::IdTooLarge { variant: variant(), id },
            Err(_) => VariantError::InvalidId { variant: variant() },
        })?,
    };

    // 1. Suits
    if descriptor.suits.is_empty() {
        return Err(VariantError::EmptySuits { variant: variant() });
    }
    let suits = descriptor
        .suits
        .iter()
        .map(|suit_name| {
            ctx.suits.get(suit_name).cloned().ok_or_else(|| VariantError::UnknownSuit {
                variant: variant(),
                suit: suit_name.clone(),
            })
        })
        .collect::<Result<Vec<Suit>, _>>()?;

    // 2. Card ranks
    let is_up_or_down = ctx.config.is_up_or_down(name);
    let mut ranks: Ranks = DEFAULT_CARD_RANKS.iter().copied().collect();
    if is_up_or_down {
        ranks.push(ctx.config.start_card_rank);
    }

    // 3. Clue colors
    let clue_colors = match &descriptor.clue_colors {
        Some(color_names) => color_names
            .iter()
            .map(|color_name| {
                ctx.colors.get(color_name).cloned().ok_or_else(|| VariantError::UnknownColor {
                    variant: variant(),
                    color: color_name.clone(),
                })
            })
            .collect::<Result<Vec<Color>, _>>()?,
        None => derive_clue_colors(&suits),
    };

    // 4. Clue ranks
    let clue_ranks = descriptor
        .clue_ranks
        .clone()
        .unwrap_or_else(|| DEFAULT_CLUE_RANKS.iter().copied().collect());

    // 5. Special rank
    let special_rank = match descriptor.special_rank {
        None => None,
        Some(rank @ 1..=5) => Some(rank as Rank),
        Some(rank) => {
            return Err(VariantError::SpecialRankOutOfRange {
                variant: variant(),
                rank: rank.into(),
            })
        }
    };

    // 6-7. Modifiers
    let has = |modifier| descriptor.has(modifier);
    let show_suit_names = has(Modifier::ShowSuitNames) || suits.iter().any(|suit| suit.reversed);

    // 8. Derived layout and note data
    let max_score = suits.len() as u32 * POINTS_PER_STACK;
    let offset_corner_elements = suits.iter().any(Suit::is_multi_color);
    let suit_abbreviations = ctx.derivations.suit_abbreviations(name, &suits)?;
    let pattern = ctx.derivations.identity_note_pattern(
        &suits,
        &ranks,
        &suit_abbreviations,
        is_up_or_down,
        ctx.config.start_card_rank,
    );
    let identity_note_pattern = Regex::new(&pattern).map_err(|source| VariantError::NotePattern {
        variant: variant(),
        source,
    })?;

    let compiled = Variant {
        name: name.to_string(),
        id,
        suits,
        ranks,
        clue_colors,
        clue_ranks,
        color_clues_touch_nothing: has(Modifier::ColorCluesTouchNothing),
        rank_clues_touch_nothing: has(Modifier::RankCluesTouchNothing),
        special_rank,
        special_all_clue_colors: has(Modifier::SpecialAllClueColors),
        special_all_clue_ranks: has(Modifier::SpecialAllClueRanks),
        special_no_clue_colors: has(Modifier::SpecialNoClueColors),
        special_no_clue_ranks: has(Modifier::SpecialNoClueRanks),
        special_deceptive: has(Modifier::SpecialDeceptive),
        odds_and_evens: has(Modifier::OddsAndEvens),
        funnels: has(Modifier::Funnels),
        chimneys: has(Modifier::Chimneys),
        show_suit_names,
        max_score,
        offset_corner_elements,
        suit_abbreviations,
        identity_note_pattern,
        modifiers: descriptor.modifiers,
        new_id: descriptor.new_id.clone(),
    };

    tracing::debug!(
        variant = %compiled.name,
        id = compiled.id,
        suits = compiled.suits.len(),
        max_score = compiled.max_score,
        "compiled variant"
    );
    Ok(compiled)
}

/// Union of the suits' clue colors, in first-seen order.
///
/// Suits touched by every color are skipped; otherwise a rainbow suit would
/// put every clue color into the variant.
fn derive_clue_colors(suits: &[Suit]) -> Vec<Color> {
    let mut clue_colors: Vec<Color> = Vec::new();
    for suit in suits.iter().filter(|suit| !suit.all_clue_colors) {
        for color in &suit.clue_colors {
            if !clue_colors.contains(color) {
                clue_colors.push(color.clone());
            }
        }
    }
    clue_colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::StandardDerivations;
    use serde_json::json;

    struct Fixture {
        colors: ColorTable,
        suits: SuitTable,
        config: CompilerConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let colors = ColorTable::new(["Red", "Yellow", "Blue", "Purple"].map(Color::new)).unwrap();
            let color = |name: &str| colors.get(name).unwrap().clone();
            let suits = SuitTable::new(vec![
                Suit::new("Red", "R", vec![color("Red")]),
                Suit::new("Yellow", "Y", vec![color("Yellow")]),
                Suit::new("Blue", "B", vec![color("Blue")]),
                Suit::new("Cardinal", "Ca", vec![color("Red"), color("Purple")]).with_abbreviation("A"),
                Suit::new("Rainbow", "M", vec![color("Red"), color("Yellow"), color("Blue"), color("Purple")])
                    .with_abbreviation("M")
                    .all_clue_colors(),
            ])
            .unwrap();
            Self {
                colors,
                suits,
                config: CompilerConfig::default(),
            }
        }

        fn compile(&self, value: Value) -> Result<Variant, VariantError> {
            let ctx = NormalizeContext::new(&self.colors, &self.suits, &self.config, &StandardDerivations);
            compile_variant(&value, &ctx)
        }
    }

    #[test]
    fn test_defaults() {
        let variant = Fixture::new()
            .compile(json!({"name": "No Variant", "id": 0, "suits": ["Red", "Yellow", "Blue"]}))
            .unwrap();

        assert_eq!(variant.ranks.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(variant.clue_ranks.as_slice(), &[1, 2, 3, 4, 5]);
        let colors: Vec<_> = variant.clue_colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(colors, vec!["Red", "Yellow", "Blue"]);
        assert_eq!(variant.special_rank, None);
        assert_eq!(variant.special_rank_index(), -1);
        assert!(!variant.show_suit_names);
        assert!(!variant.offset_corner_elements);
        assert_eq!(variant.max_score, 15);
        assert_eq!(variant.suit_abbreviations, vec!["R", "Y", "B"]);
    }

    #[test]
    fn test_all_clue_color_suits_do_not_add_colors() {
        let variant = Fixture::new()
            .compile(json!({"name": "Rainbow (3 Suits)", "id": 1, "suits": ["Red", "Blue", "Rainbow"]}))
            .unwrap();

        let colors: Vec<_> = variant.clue_colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(colors, vec!["Red", "Blue"]);
        assert!(variant.offset_corner_elements);
    }

    #[test]
    fn test_derived_colors_are_deduplicated() {
        let variant = Fixture::new()
            .compile(json!({"name": "Cardinal (2 Suits)", "id": 2, "suits": ["Red", "Cardinal"]}))
            .unwrap();

        let colors: Vec<_> = variant.clue_colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(colors, vec!["Red", "Purple"]);
    }

    #[test]
    fn test_explicit_clue_colors() {
        let variant = Fixture::new()
            .compile(json!({"name": "A", "id": 3, "suits": ["Red"], "clueColors": ["Blue"]}))
            .unwrap();
        assert_eq!(variant.clue_colors, vec![Color::new("Blue")]);

        let err = Fixture::new()
            .compile(json!({"name": "A", "id": 3, "suits": ["Red"], "clueColors": ["Teal"]}))
            .unwrap_err();
        assert!(matches!(err, VariantError::UnknownColor { ref color, .. } if color == "Teal"));
    }

    #[test]
    fn test_unknown_suit_names_variant_and_suit() {
        let err = Fixture::new()
            .compile(json!({"name": "Teal (1 Suit)", "id": 4, "suits": ["Teal"]}))
            .unwrap_err();
        assert!(matches!(
            err,
            VariantError::UnknownSuit { ref variant, ref suit } if variant == "Teal (1 Suit)" && suit == "Teal"
        ));
    }

    #[test]
    fn test_up_or_down_adds_start_rank_not_score() {
        let variant = Fixture::new()
            .compile(json!({"name": "Up or Down (3 Suits)", "id": 5, "suits": ["Red", "Yellow", "Blue"]}))
            .unwrap();

        assert_eq!(variant.ranks.as_slice(), &[1, 2, 3, 4, 5, 7]);
        assert_eq!(variant.max_score, 15);
        assert!(variant.has_start_cards(7));
        assert!(variant.is_identity_note("rs"));
    }

    #[test]
    fn test_max_score_is_five_per_suit_for_any_config() {
        let mut fixture = Fixture::new();
        fixture.config = CompilerConfig::default().with_start_card_rank(6);

        let variant = fixture
            .compile(json!({"name": "Up or Down (4 Suits)", "id": 8, "suits": ["Red", "Yellow", "Blue", "Cardinal"]}))
            .unwrap();
        assert_eq!(variant.ranks.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(variant.max_score, 20);
    }

    #[test]
    fn test_special_rank_and_flags() {
        let variant = Fixture::new()
            .compile(json!({
                "name": "Brown-Fives",
                "id": 6,
                "suits": ["Red"],
                "specialRank": 5,
                "specialNoClueRanks": true,
                "clueRanks": [1, 2, 3, 4]
            }))
            .unwrap();

        assert_eq!(variant.special_rank, Some(5));
        assert!(variant.special_no_clue_ranks);
        assert!(!variant.special_all_clue_colors);
        assert_eq!(variant.clue_ranks.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_reversed_suit_forces_show_suit_names() {
        let variant = Fixture::new()
            .compile(json!({"name": "Reversed", "id": 7, "suits": ["Red", "Blue Reversed"]}))
            .unwrap();
        assert!(variant.show_suit_names);
        assert!(!variant.has(Modifier::ShowSuitNames));
    }

    #[test]
    fn test_code_built_descriptor_checked() {
        let fixture = Fixture::new();
        let ctx = NormalizeContext::new(&fixture.colors, &fixture.suits, &fixture.config, &StandardDerivations);

        let unnamed = VariantJson {
            suits: vec!["Red".into()],
            id: Some(1),
            ..VariantJson::default()
        };
        assert!(matches!(normalize(&unnamed, &ctx), Err(VariantError::EmptyName)));

        let no_id = unnamed.clone().with_name("A");
        let no_id = VariantJson { id: None, ..no_id };
        assert!(matches!(normalize(&no_id, &ctx), Err(VariantError::MissingId { .. })));

        let mut out_of_range = VariantJson::new("W3", 1, vec!["Red".into()]);
        out_of_range.special_rank = Some(7);
        assert!(matches!(
            normalize(&out_of_range, &ctx),
            Err(VariantError::SpecialRankOutOfRange { ref rank, .. }) if rank.as_i64() == Some(7)
        ));

        let too_large = VariantJson::new("Huge", 5_000_000_000, vec!["Red".into()]);
        assert!(matches!(
            normalize(&too_large, &ctx),
            Err(VariantError::IdTooLarge { id: 5_000_000_000, .. })
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let variant = Fixture::new()
            .compile(json!({"name": "No Variant", "id": 0, "suits": ["Red"]}))
            .unwrap();
        let value = serde_json::to_value(&variant).unwrap();

        assert_eq!(value["specialRank"], json!(-1));
        assert_eq!(value["maxScore"], json!(5));
        assert!(value["identityNotePattern"].as_str().unwrap().starts_with("(?i)^"));
        assert!(value.get("newID").is_none());
    }
}
