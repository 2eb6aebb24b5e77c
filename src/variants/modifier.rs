//! Presence-means-true variant modifiers.
//!
//! A modifier flags an exceptional rule. In catalog JSON it is either absent
//! or present with the value `true`; `false` is rejected because it cannot be
//! told apart from absence. `ModifierSet` stores exactly that domain: a
//! modifier is either in the set or not.

use serde::{Serialize, Serializer};

/// Every optional boolean field a variant descriptor may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    SpecialAllClueColors,
    SpecialAllClueRanks,
    SpecialNoClueColors,
    SpecialNoClueRanks,
    SpecialDeceptive,
    ColorCluesTouchNothing,
    RankCluesTouchNothing,
    OddsAndEvens,
    Funnels,
    Chimneys,
    ShowSuitNames,
    AlternatingClues,
    ClueStarved,
    CowPig,
    Duck,
    ThrowItInHole,
    UpOrDown,
    Synesthesia,
    CriticalFours,
}

impl Modifier {
    /// All modifiers, in declaration order.
    pub const ALL: [Modifier; 19] = [
        Modifier::SpecialAllClueColors,
        Modifier::SpecialAllClueRanks,
        Modifier::SpecialNoClueColors,
        Modifier::SpecialNoClueRanks,
        Modifier::SpecialDeceptive,
        Modifier::ColorCluesTouchNothing,
        Modifier::RankCluesTouchNothing,
        Modifier::OddsAndEvens,
        Modifier::Funnels,
        Modifier::Chimneys,
        Modifier::ShowSuitNames,
        Modifier::AlternatingClues,
        Modifier::ClueStarved,
        Modifier::CowPig,
        Modifier::Duck,
        Modifier::ThrowItInHole,
        Modifier::UpOrDown,
        Modifier::Synesthesia,
        Modifier::CriticalFours,
    ];

    /// The field name used in catalog JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Modifier::SpecialAllClueColors => "specialAllClueColors",
            Modifier::SpecialAllClueRanks => "specialAllClueRanks",
            Modifier::SpecialNoClueColors => "specialNoClueColors",
            Modifier::SpecialNoClueRanks => "specialNoClueRanks",
            Modifier::SpecialDeceptive => "specialDeceptive",
            Modifier::ColorCluesTouchNothing => "colorCluesTouchNothing",
            Modifier::RankCluesTouchNothing => "rankCluesTouchNothing",
            Modifier::OddsAndEvens => "oddsAndEvens",
            Modifier::Funnels => "funnels",
            Modifier::Chimneys => "chimneys",
            Modifier::ShowSuitNames => "showSuitNames",
            Modifier::AlternatingClues => "alternatingClues",
            Modifier::ClueStarved => "clueStarved",
            Modifier::CowPig => "cowPig",
            Modifier::Duck => "duck",
            Modifier::ThrowItInHole => "throwItInHole",
            Modifier::UpOrDown => "upOrDown",
            Modifier::Synesthesia => "synesthesia",
            Modifier::CriticalFours => "criticalFours",
        }
    }

    /// Look a modifier up by its JSON field name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Modifier> {
        Modifier::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Whether the modifier changes how the special rank is clued.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            Modifier::SpecialAllClueColors
                | Modifier::SpecialAllClueRanks
                | Modifier::SpecialNoClueColors
                | Modifier::SpecialNoClueRanks
                | Modifier::SpecialDeceptive
        )
    }

    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A set of modifiers that are present (and therefore `true`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet(u32);

impl ModifierSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    /// Add a modifier (builder pattern).
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    #[must_use]
    pub const fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Present modifiers, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = ModifierSet::new();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

/// Serialized as a list of JSON field names.
impl Serialize for ModifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Modifier::key))
    }
}
