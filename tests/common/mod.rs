//! Shared fixtures: a small but realistic slice of the game's data files.

#![allow(dead_code)]

use hanab_variants::{
    CompilerConfig, DataSources, GameData, NormalizeContext, StandardDerivations,
};

pub const COLORS: &str = r##"[
    {"name": "Red", "abbreviation": "R", "fill": "#d9001a"},
    {"name": "Yellow", "abbreviation": "Y", "fill": "#d9d900"},
    {"name": "Green", "abbreviation": "G", "fill": "#00cc00"},
    {"name": "Blue", "abbreviation": "B", "fill": "#0044cc"},
    {"name": "Purple", "abbreviation": "P", "fill": "#6600cc"},
    {"name": "Black", "abbreviation": "K", "fill": "#111111"}
]"##;

pub const SUITS: &str = r#"[
    {"name": "Red", "id": "R", "abbreviation": "R"},
    {"name": "Yellow", "id": "Y", "abbreviation": "Y"},
    {"name": "Green", "id": "G", "abbreviation": "G"},
    {"name": "Blue", "id": "B", "abbreviation": "B"},
    {"name": "Purple", "id": "P", "abbreviation": "P"},
    {"name": "Black", "id": "K", "abbreviation": "K", "oneOfEach": true},
    {"name": "Rainbow", "id": "M", "abbreviation": "M", "allClueColors": true,
     "clueColors": ["Red", "Yellow", "Green", "Blue", "Purple"]},
    {"name": "Cardinal", "id": "Ca", "abbreviation": "A", "clueColors": ["Red", "Purple"]},
    {"name": "Prism", "id": "I", "abbreviation": "I", "clueColors": [], "showSuitName": true}
]"#;

pub const CHARACTERS: &str = r#"[
    {"id": 0, "name": "Fuming", "description": "Can only clue numbers and [random color]", "emoji": "🌋"},
    {"id": 1, "name": "Dumbfounded", "description": "Can only clue colors and [random number]", "emoji": "🤯"},
    {"id": 7, "name": "Spiteful", "description": "Cannot clue the player to their left", "emoji": "😈", "not2P": true}
]"#;

pub const VARIANTS: &str = r#"[
    {"name": "No Variant", "id": 0, "suits": ["Red", "Yellow", "Green", "Blue", "Purple"]},
    {"name": "6 Suits", "id": 1, "suits": ["Red", "Yellow", "Green", "Blue", "Purple", "Black"]},
    {"name": "Rainbow (5 Suits)", "id": 2, "suits": ["Red", "Yellow", "Green", "Blue", "Rainbow"]},
    {"name": "Cardinal (4 Suits)", "id": 3, "suits": ["Red", "Yellow", "Blue", "Cardinal"]},
    {"name": "Up or Down (5 Suits)", "id": 4, "suits": ["Red", "Yellow", "Green", "Blue", "Purple"],
     "showSuitNames": true, "upOrDown": true},
    {"name": "Pink-Fives (5 Suits)", "id": 5, "suits": ["Red", "Yellow", "Green", "Blue", "Purple"],
     "specialRank": 5, "specialAllClueRanks": true, "clueRanks": [1, 2, 3, 4], "newID": "R+Y+G+B+P:P5"},
    {"name": "Reversed (5 Suits)", "id": 6, "suits": ["Red", "Yellow", "Green", "Blue", "Purple Reversed"]},
    {"name": "Color Mute (4 Suits)", "id": 7, "suits": ["Red", "Yellow", "Green", "Blue"], "clueColors": []},
    {"name": "Odds and Evens (5 Suits)", "id": 8, "suits": ["Red", "Yellow", "Green", "Blue", "Purple"],
     "oddsAndEvens": true, "clueRanks": [1, 2]},
    {"name": "Duck (5 Suits)", "id": 9, "suits": ["Red", "Yellow", "Green", "Blue", "Purple"], "duck": true}
]"#;

pub fn sources() -> DataSources<'static> {
    DataSources {
        colors: COLORS,
        suits: SUITS,
        characters: CHARACTERS,
        variants: VARIANTS,
    }
}

pub fn game_data() -> GameData {
    GameData::load(&sources(), CompilerConfig::default()).expect("fixture data should compile")
}

/// Run `f` with a normalization context over the fixture tables.
pub fn with_context<R>(data: &GameData, f: impl FnOnce(&NormalizeContext<'_>) -> R) -> R {
    let ctx = NormalizeContext::new(data.colors(), data.suits(), data.config(), &StandardDerivations);
    f(&ctx)
}
