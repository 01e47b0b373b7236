// Keyword -> value table collected from the affix file

use hashbrown::HashMap;
use typo_core::enums::{KW_COMPOUNDMIN, WordFlag};

/// Settings declared by bare `<KEYWORD> <value>` lines of the affix file.
///
/// Later lines for the same keyword overwrite earlier ones. Keywords the
/// engine does not interpret are kept as-is so callers can still read them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagTable {
    values: HashMap<String, String>,
}

impl FlagTable {
    /// Create an empty flag table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, keyword: &str, value: &str) {
        self.values.insert(keyword.to_string(), value.to_string());
    }

    /// Value declared for `keyword`, if any.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.values.get(keyword).map(String::as_str)
    }

    /// Whether `keyword` was declared.
    pub fn contains(&self, keyword: &str) -> bool {
        self.values.contains_key(keyword)
    }

    /// Rule code declared for a per-word flag (`KEEPCASE K` -> `"K"`).
    pub fn code_for(&self, flag: WordFlag) -> Option<&str> {
        self.get(flag.keyword())
    }

    /// Minimum compound length, or `None` when compound checking is disabled.
    ///
    /// A missing or non-numeric `COMPOUNDMIN` disables compound checking
    /// rather than defaulting to zero.
    pub fn compound_min(&self) -> Option<usize> {
        self.get(KW_COMPOUNDMIN)?.parse().ok()
    }

    /// Number of declared keywords.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keyword was declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(keyword, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
