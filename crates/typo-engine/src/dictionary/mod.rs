// Expanded word table and compound matchers

mod builder;
pub mod compound;

pub use builder::build_dictionary;
pub use compound::CompoundSet;

use hashbrown::HashMap;

/// Rule codes attached to one word-list line.
pub type FlagSet = Vec<String>;

/// What the dictionary knows about an exact surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEntry {
    /// Listed without codes, or derived by an affix rule. Always valid.
    Bare,
    /// Listed one or more times with codes; one flag set per listing.
    Flagged(Vec<FlagSet>),
}

impl WordEntry {
    /// Flag sets of every listing; empty for [`WordEntry::Bare`].
    pub fn flag_sets(&self) -> &[FlagSet] {
        match self {
            Self::Bare => &[],
            Self::Flagged(sets) => sets,
        }
    }

    /// Whether any listing carries `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.flag_sets()
            .iter()
            .any(|set| set.iter().any(|c| c == code))
    }
}

/// Word table produced by [`build_dictionary`].
///
/// Keys are exact surface forms; case folding happens at query time.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashMap<String, WordEntry>,
    compounds: CompoundSet,
}

impl Dictionary {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            words: HashMap::with_capacity(capacity),
            compounds: CompoundSet::default(),
        }
    }

    /// Record `word`. A listing with codes adds one flag set; a listing
    /// without codes only makes sure the word is present.
    pub(crate) fn insert(&mut self, word: &str, codes: FlagSet) {
        let entry = self.words.entry_ref(word).or_insert(WordEntry::Bare);
        if codes.is_empty() {
            return;
        }
        match entry {
            WordEntry::Flagged(sets) => sets.push(codes),
            bare => *bare = WordEntry::Flagged(vec![codes]),
        }
    }

    pub(crate) fn set_compounds(&mut self, compounds: CompoundSet) {
        self.compounds = compounds;
    }

    /// Entry for the exact form `word`.
    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Compiled compound-rule matchers.
    pub fn compounds(&self) -> &CompoundSet {
        &self.compounds
    }

    /// Number of distinct surface forms, derived forms included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
