// Suggestion generation
//
// Produces ranked corrections for a misspelled word:
//   - `edits`: single-edit generators (EditGenerator trait) and the two-level search
//   - `ranking`: scoring by edit-path multiplicity, ordering, final selection
//   - `cache`: bounded per-word cache of finished suggestion lists

pub mod cache;
pub mod edits;
pub mod ranking;

pub use cache::{CachedSuggestions, SuggestionCache};
pub use edits::{EditGenerator, EditSearch, default_generators};
pub use ranking::Candidate;

use std::collections::BTreeSet;

use tracing::trace;
use typo_core::enums::{KW_TRY, KW_WORDCHARS};

use crate::affix::{AffixTable, ReplacementPair};
use crate::speller::Speller;

/// Build the substitution and insertion alphabet: the characters of `TRY`
/// and `WORDCHARS`, deduplicated and sorted.
pub fn alphabet_for(affixes: &AffixTable) -> Vec<char> {
    let flags = affixes.flags();
    [KW_TRY, KW_WORDCHARS]
        .into_iter()
        .filter_map(|keyword| flags.get(keyword))
        .flat_map(str::chars)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// Suggestion engine bound to one compiled affix table.
pub struct Suggester {
    search: EditSearch,
    replacements: Vec<ReplacementPair>,
    cache: SuggestionCache,
}

impl Suggester {
    /// Create a suggester with the default edit generators.
    pub fn new(affixes: &AffixTable, cache_capacity: Option<usize>) -> Self {
        Self::with_generators(affixes, default_generators(), cache_capacity)
    }

    pub fn with_generators(
        affixes: &AffixTable,
        generators: Vec<Box<dyn EditGenerator>>,
        cache_capacity: Option<usize>,
    ) -> Self {
        Self {
            search: EditSearch::new(generators, alphabet_for(affixes)),
            replacements: affixes.replacements().to_vec(),
            cache: SuggestionCache::new(cache_capacity),
        }
    }

    pub fn alphabet(&self) -> &[char] {
        self.search.alphabet()
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    /// First REP substitution that yields a correct word.
    fn replacement_fix(&self, speller: &dyn Speller, word: &str) -> Option<String> {
        self.replacements
            .iter()
            .filter_map(|pair| pair.apply(word))
            .find(|fixed| speller.is_correct(fixed))
    }

    /// Up to `limit` corrections for `word`, best first.
    ///
    /// Correct words, blank input and a zero limit give no suggestions. A
    /// REP pair that turns the word into a correct one short-circuits the
    /// search and returns just that word. Neither of those answers is
    /// cached; full searches are.
    pub fn suggest(&self, speller: &dyn Speller, word: &str, limit: usize) -> Vec<String> {
        if limit == 0 || word.trim().is_empty() {
            return Vec::new();
        }
        if let Some(hit) = self.cache.lookup(word, limit) {
            trace!(word, limit, "suggestion cache hit");
            return hit;
        }
        if speller.is_correct(word) {
            return Vec::new();
        }
        if let Some(fixed) = self.replacement_fix(speller, word) {
            trace!(word, fixed = fixed.as_str(), "replacement table shortcut");
            return vec![fixed];
        }

        let ed1 = self.search.edits1(word);
        let ed2 = self.search.edits2_known(&ed1, speller);
        let ranked = ranking::rank(&ed1, ed2, speller);
        let suggestions = ranking::select(&ranked, word, limit, speller);
        trace!(
            word,
            edits1 = ed1.len(),
            candidates = ranked.len(),
            returned = suggestions.len(),
            "suggestion search finished"
        );

        self.cache.insert(word, suggestions.clone(), limit);
        suggestions
    }
}
