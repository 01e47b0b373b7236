// Shared enums: affix kinds, flag encodings, well-known affix-file keywords

use std::fmt;
use std::str::FromStr;

/// Whether an affix rule attaches to the start or the end of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    /// `PFX` rule: the entry's text is prepended.
    Prefix,
    /// `SFX` rule: the entry's text is appended.
    Suffix,
}

impl AffixKind {
    /// Map a rule-header keyword (`PFX` / `SFX`) to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            KW_PFX => Some(Self::Prefix),
            KW_SFX => Some(Self::Suffix),
            _ => None,
        }
    }

    /// The opposite kind, used when probing prefix/suffix cross-combination.
    pub fn opposite(self) -> Self {
        match self {
            Self::Prefix => Self::Suffix,
            Self::Suffix => Self::Prefix,
        }
    }
}

impl fmt::Display for AffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prefix => KW_PFX,
            Self::Suffix => KW_SFX,
        })
    }
}

/// Error returned when a `FLAG` value names an unsupported encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flag encoding: {0:?}")]
pub struct UnknownFlagMode(pub String);

/// How rule codes are written after the `/` of a word-list entry and in
/// continuation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlagMode {
    /// No `FLAG` line: one code per character.
    #[default]
    Char,
    /// `FLAG long`: two characters per code.
    Long,
    /// `FLAG num`: comma-separated decimal codes.
    Numeric,
    /// `FLAG UTF-8`: one Unicode scalar value per code.
    Utf8,
}

impl FromStr for FlagMode {
    type Err = UnknownFlagMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "long" => Ok(Self::Long),
            "num" => Ok(Self::Numeric),
            "UTF-8" => Ok(Self::Utf8),
            other => Err(UnknownFlagMode(other.to_string())),
        }
    }
}

impl FlagMode {
    /// Split an encoded flag string into individual rule codes.
    ///
    /// An empty input yields no codes. In `Long` mode a trailing odd
    /// character becomes a one-character code; in `Numeric` mode empty
    /// segments (`"1,,2"`) are dropped.
    pub fn split_codes(self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        match self {
            Self::Char | Self::Utf8 => text.chars().map(String::from).collect(),
            Self::Long => {
                let chars: Vec<char> = text.chars().collect();
                chars.chunks(2).map(|pair| pair.iter().collect()).collect()
            }
            Self::Numeric => text
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Per-word flags whose rule code is declared by a keyword line in the
/// affix file (e.g. `KEEPCASE K`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordFlag {
    /// Stem is never valid without an affix.
    NeedAffix,
    /// Word must match with its exact casing.
    KeepCase,
    /// Word is only valid as part of a compound.
    OnlyInCompound,
    /// Word is never offered as a suggestion.
    NoSuggest,
    /// Word is ranked ahead of other suggestions.
    PrioritySuggest,
}

impl WordFlag {
    /// All word flags, in declaration order.
    pub const ALL: [WordFlag; 5] = [
        WordFlag::NeedAffix,
        WordFlag::KeepCase,
        WordFlag::OnlyInCompound,
        WordFlag::NoSuggest,
        WordFlag::PrioritySuggest,
    ];

    /// The affix-file keyword that declares this flag's rule code.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::NeedAffix => KW_NEEDAFFIX,
            Self::KeepCase => KW_KEEPCASE,
            Self::OnlyInCompound => KW_ONLYINCOMPOUND,
            Self::NoSuggest => KW_NOSUGGEST,
            Self::PrioritySuggest => KW_PRIORITYSUGGEST,
        }
    }
}

// ---------------------------------------------------------------------------
// Affix-file keywords
// ---------------------------------------------------------------------------

/// Prefix rule header / entry keyword.
pub const KW_PFX: &str = "PFX";

/// Suffix rule header / entry keyword.
pub const KW_SFX: &str = "SFX";

/// Compound rule header / entry keyword.
pub const KW_COMPOUNDRULE: &str = "COMPOUNDRULE";

/// Replacement table keyword.
pub const KW_REP: &str = "REP";

/// Flag encoding selector (`long`, `num`, `UTF-8`).
pub const KW_FLAG: &str = "FLAG";

/// Flag marking stems that are only valid with an affix applied.
pub const KW_NEEDAFFIX: &str = "NEEDAFFIX";

/// Flag forbidding case-folded matches.
pub const KW_KEEPCASE: &str = "KEEPCASE";

/// Flag marking words only valid inside compounds.
pub const KW_ONLYINCOMPOUND: &str = "ONLYINCOMPOUND";

/// Minimum length (in characters) of a compound word.
pub const KW_COMPOUNDMIN: &str = "COMPOUNDMIN";

/// Characters tried by the suggestion search, most frequent first.
pub const KW_TRY: &str = "TRY";

/// Extra characters that belong to words.
pub const KW_WORDCHARS: &str = "WORDCHARS";

/// Flag excluding a word from suggestions.
pub const KW_NOSUGGEST: &str = "NOSUGGEST";

/// Flag boosting a word in suggestion ranking.
pub const KW_PRIORITYSUGGEST: &str = "PRIORITYSUGGEST";
