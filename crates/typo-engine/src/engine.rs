// Engine: the compiled spell-checking handle.
//
// Owns the affix table, the word checker and the suggester. Everything but
// the suggestion cache is immutable after `compile`, so one engine can be
// shared across threads behind an `Arc`.

use tracing::debug;

use crate::CompileError;
use crate::affix::{AffixTable, FlagTable, compile_affixes};
use crate::dictionary::build_dictionary;
use crate::options::EngineOptions;
use crate::speller::{Speller, WordChecker};
use crate::suggestion::{CachedSuggestions, Suggester};

/// A dictionary compiled from affix-file and word-list text.
pub struct Engine {
    affixes: AffixTable,
    checker: WordChecker,
    suggester: Suggester,
    options: EngineOptions,
}

impl Engine {
    /// Compile an engine with [`EngineOptions::default`].
    pub fn compile(affix_text: &str, dictionary_text: &str) -> Result<Self, CompileError> {
        Self::compile_with_options(affix_text, dictionary_text, EngineOptions::default())
    }

    /// Compile an engine.
    ///
    /// The affix file is compiled first so the flag encoding is known
    /// before the word list is read. Any error aborts the whole compile.
    pub fn compile_with_options(
        affix_text: &str,
        dictionary_text: &str,
        options: EngineOptions,
    ) -> Result<Self, CompileError> {
        let affixes = compile_affixes(affix_text)?;
        let dictionary =
            build_dictionary(dictionary_text, &affixes, options.compound_regex_size_limit)?;
        let checker = WordChecker::new(dictionary, &affixes);
        let suggester = Suggester::new(&affixes, options.suggestion_cache_capacity);
        debug!(
            rules = affixes.rule_count(),
            flag_mode = ?affixes.flag_mode(),
            words = checker.dictionary().len(),
            alphabet = suggester.alphabet().len(),
            "engine ready"
        );
        Ok(Self {
            affixes,
            checker,
            suggester,
            options,
        })
    }

    // -----------------------------------------------------------------------
    // Checking
    // -----------------------------------------------------------------------

    /// Whether `word` is spelled correctly, allowing the case-folded
    /// fallbacks of the word checker.
    pub fn is_correct(&self, word: &str) -> bool {
        self.checker.is_correct(word)
    }

    /// Whether `word` is correct exactly as written.
    pub fn check_exact(&self, word: &str) -> bool {
        self.checker.check_exact(word)
    }

    /// Whether any listing of the exact form `word` carries the rule code
    /// declared by `keyword` (e.g. `"KEEPCASE"`).
    pub fn has_flag(&self, word: &str, keyword: &str) -> bool {
        let Some(code) = self.affixes.flags().get(keyword) else {
            return false;
        };
        self.checker
            .dictionary()
            .lookup(word)
            .is_some_and(|entry| entry.has_code(code))
    }

    // -----------------------------------------------------------------------
    // Suggestions
    // -----------------------------------------------------------------------

    /// Up to `limit` corrections for `word`, best first.
    pub fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        self.suggester.suggest(&self.checker, word, limit)
    }

    /// [`Self::suggest`] with the configured default limit.
    pub fn suggest_default(&self, word: &str) -> Vec<String> {
        self.suggest(word, self.options.default_suggestion_limit)
    }

    /// The cache entry for `word`, if a full search was cached.
    pub fn cached_suggestions(&self, word: &str) -> Option<CachedSuggestions> {
        self.suggester.cache().get(word)
    }

    pub fn clear_suggestion_cache(&self) {
        self.suggester.cache().clear();
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Distinct surface forms in the expanded dictionary.
    pub fn word_count(&self) -> usize {
        self.checker.dictionary().len()
    }

    /// Distinct affix rule codes.
    pub fn rule_count(&self) -> usize {
        self.affixes.rule_count()
    }

    pub fn flags(&self) -> &FlagTable {
        self.affixes.flags()
    }

    pub fn affixes(&self) -> &AffixTable {
        &self.affixes
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("rules", &self.rule_count())
            .field("words", &self.word_count())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
