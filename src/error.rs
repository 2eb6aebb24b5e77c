//! Error types for table loading, variant decoding, and catalog compilation.
//!
//! Every error names the variant, field, and raw token that caused it. Errors
//! are classified by [`Severity`]: fatal errors mean the static data itself is
//! corrupt, validation errors mean a descriptor broke a shape or value rule.
//! Either way, catalog compilation stops at the first error.

use serde_json::Number;

/// How serious an error is for the data-build workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Corrupt static data. Never retried, never caught.
    Fatal,
    /// A descriptor violated a validation rule.
    Validation,
}

/// Errors from the compact-ID decoder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to parse the suit ID \"{token}\" in {compact_id}")]
    MalformedSuitToken { token: String, compact_id: String },

    #[error("failed to find a suit with an ID of \"{suit_id}\" in {compact_id}")]
    UnknownSuitId { suit_id: String, compact_id: String },

    #[error("suit \"{suit}\" has an unknown modifier of \"{modifier}\" in the suit ID of: {token}")]
    UnknownSuitModifier {
        suit: String,
        modifier: String,
        token: String,
    },

    #[error("failed to parse the variant modifier \"{modifier}\" in {compact_id}")]
    MalformedModifier { modifier: String, compact_id: String },

    #[error("unknown variant modifier \":{modifier}\" in {compact_id}")]
    UnknownModifier { modifier: String, compact_id: String },

    #[error("failed to parse the special rank from the variant modifier \"{modifier}\" in {compact_id}")]
    MissingSpecialRank { modifier: String, compact_id: String },
}

impl DecodeError {
    /// Unknown modifier codes are raised as validation errors; everything else
    /// points at corrupt suit data or a malformed code and is fatal.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            DecodeError::UnknownModifier { .. } => Severity::Validation,
            _ => Severity::Fatal,
        }
    }

    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// Errors from validating and normalizing a single variant descriptor.
///
/// `variant` is the variant's name, or `<unnamed>` when the name itself
/// could not be read.
#[derive(Debug, thiserror::Error)]
pub enum VariantError {
    #[error("a variant descriptor must be a JSON object")]
    NotAnObject,

    #[error("there is a variant without a \"name\" property")]
    MissingName,

    #[error("there is a variant whose \"name\" property is not a string")]
    NameNotString,

    #[error("there is a variant with an empty name")]
    EmptyName,

    #[error("the \"{variant}\" variant does not have an ID")]
    MissingId { variant: String },

    #[error("the \"{variant}\" variant has an invalid ID")]
    InvalidId { variant: String },

    #[error("the \"{variant}\" variant has an ID of {id}, but IDs can be at most {}", u32::MAX)]
    IdTooLarge { variant: String, id: u64 },

    #[error("the \"{variant}\" variant does not have suits")]
    MissingSuits { variant: String },

    #[error("the suits for the variant \"{variant}\" were not specified as an array")]
    SuitsNotArray { variant: String },

    #[error("the suits for the variant \"{variant}\" is empty")]
    EmptySuits { variant: String },

    #[error("one of the suits for the variant \"{variant}\" was not specified as a string")]
    SuitNotString { variant: String },

    #[error("the suit \"{suit}\" in the variant \"{variant}\" does not exist")]
    UnknownSuit { variant: String, suit: String },

    #[error("the clue colors for the variant \"{variant}\" were not specified as an array")]
    ClueColorsNotArray { variant: String },

    #[error("one of the clue colors for the variant \"{variant}\" was not specified as a string")]
    ClueColorNotString { variant: String },

    #[error("the color \"{color}\" in the variant \"{variant}\" does not exist")]
    UnknownColor { variant: String, color: String },

    #[error("the clue ranks for the variant \"{variant}\" were not specified as an array")]
    ClueRanksNotArray { variant: String },

    #[error("one of the clue ranks for the variant \"{variant}\" was not a number")]
    ClueRankNotNumber { variant: String },

    #[error("one of the clue ranks for the variant \"{variant}\" is {value}, which is not a whole number from 1 to 5")]
    ClueRankOutOfDomain { variant: String, value: Number },

    #[error("the \"specialRank\" property for the variant \"{variant}\" must be a number")]
    SpecialRankNotNumber { variant: String },

    #[error("the \"specialRank\" property for the variant \"{variant}\" must be between 1 and 5, got {rank}")]
    SpecialRankOutOfRange { variant: String, rank: Number },

    #[error("the \"{field}\" property for the variant \"{variant}\" must be set to true")]
    FlagNotTrue {
        variant: String,
        field: &'static str,
    },

    #[error("the \"newID\" property for the variant \"{variant}\" must be a string")]
    NewIdNotString { variant: String },

    #[error("failed to find a suit abbreviation for \"{suit}\" in the variant \"{variant}\"")]
    NoSuitAbbreviation { variant: String, suit: String },

    #[error("the identity note pattern for the variant \"{variant}\" does not compile: {source}")]
    NotePattern {
        variant: String,
        #[source]
        source: regex::Error,
    },
}

impl VariantError {
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::Validation
    }
}

/// Errors from building the color, suit, and character tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("the {table} table is not valid JSON: {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("there are two colors with the name of: {0}")]
    DuplicateColor(String),

    #[error("there are two suits with the name of: {0}")]
    DuplicateSuit(String),

    #[error("the suits \"{first}\" and \"{second}\" share the ID \"{id}\"")]
    DuplicateSuitId {
        id: String,
        first: String,
        second: String,
    },

    #[error("the suit \"{suit}\" has a clue color of \"{color}\", but that color does not exist")]
    UnknownSuitColor { suit: String, color: String },

    #[error("there are two characters with the ID of: {0}")]
    DuplicateCharacter(u32),
}

/// Errors from compiling a whole variant catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("the variant catalog did not have any elements in it")]
    Empty,

    #[error("the variant catalog is not a JSON array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("variant #{index} is invalid: {source}")]
    Variant {
        index: usize,
        #[source]
        source: VariantError,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("the variant decoded from \"{compact_id}\" is invalid: {source}")]
    Compact {
        compact_id: String,
        #[source]
        source: VariantError,
    },

    #[error("there are two variants with the name of: {0}")]
    DuplicateName(String),

    #[error("there are two variants with the ID of {id} (\"{first}\" and \"{second}\")")]
    DuplicateId { id: u32, first: String, second: String },

    #[error("failed to find the default variant of: {0}")]
    MissingDefaultVariant(String),

    #[error("there is no variant with an ID of {0} (variant IDs must be sequential)")]
    SkippedId(u32),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl CatalogError {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            CatalogError::Variant { source, .. } | CatalogError::Compact { source, .. } => {
                source.severity()
            }
            CatalogError::Decode(source) => source.severity(),
            _ => Severity::Fatal,
        }
    }

    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// A lookup against the compiled data missed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("failed to find the \"{0}\" suit")]
    Suit(String),

    #[error("failed to find the \"{0}\" variant")]
    Variant(String),

    #[error("failed to find the variant with ID {0}")]
    VariantId(u32),

    #[error("failed to find the character with ID {0}")]
    Character(u32),
}
