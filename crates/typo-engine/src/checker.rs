// Caller-facing spell checker: overlay first, then the compiled engine

use tracing::{debug, warn};
use typo_core::character::trim_non_word;

use crate::CompileError;
use crate::engine::Engine;
use crate::options::{CheckerOptions, EngineOptions};
use crate::overlay::SessionOverlay;

/// Returned by queries made before a dictionary has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("spell checker queried before a dictionary was loaded")]
pub struct NotReady;

/// Spell checker for text taken from a document.
///
/// Words are stripped of surrounding punctuation, then accepted by the
/// [`SessionOverlay`] or checked by the compiled [`Engine`]. Until
/// [`SpellChecker::load`] succeeds every query fails with [`NotReady`]
/// instead of guessing; the overlay can be filled at any time.
#[derive(Debug, Default)]
pub struct SpellChecker {
    engine: Option<Engine>,
    overlay: SessionOverlay,
    options: CheckerOptions,
}

impl SpellChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CheckerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Compile and install a dictionary.
    ///
    /// On failure the checker is left without a dictionary, so a broken
    /// reload never keeps answering from the old one.
    pub fn load(&mut self, affix_text: &str, dictionary_text: &str) -> Result<(), CompileError> {
        self.load_with_options(affix_text, dictionary_text, EngineOptions::default())
    }

    pub fn load_with_options(
        &mut self,
        affix_text: &str,
        dictionary_text: &str,
        options: EngineOptions,
    ) -> Result<(), CompileError> {
        self.engine = None;
        match Engine::compile_with_options(affix_text, dictionary_text, options) {
            Ok(engine) => {
                debug!(words = engine.word_count(), "dictionary loaded");
                self.engine = Some(engine);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "dictionary failed to load");
                Err(err)
            }
        }
    }

    /// Install an already compiled engine.
    pub fn install(&mut self, engine: Engine) {
        self.engine = Some(engine);
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    pub fn overlay(&self) -> &SessionOverlay {
        &self.overlay
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    fn clean<'w>(&self, word: &'w str) -> &'w str {
        if self.options.strip_punctuation {
            trim_non_word(word)
        } else {
            word.trim()
        }
    }

    fn ready_engine(&self) -> Result<&Engine, NotReady> {
        self.engine.as_ref().ok_or(NotReady)
    }

    /// Whether `word` is acceptable.
    pub fn check(&self, word: &str) -> Result<bool, NotReady> {
        let engine = self.ready_engine()?;
        let word = self.clean(word);
        if word.is_empty() {
            return Ok(self.options.accept_empty);
        }
        Ok(self.overlay.accepts(word) || engine.is_correct(word))
    }

    /// Up to `limit` corrections for `word`. Words the overlay accepts get
    /// none.
    pub fn suggest(&self, word: &str, limit: usize) -> Result<Vec<String>, NotReady> {
        let engine = self.ready_engine()?;
        let word = self.clean(word);
        if word.is_empty() || self.overlay.accepts(word) {
            return Ok(Vec::new());
        }
        Ok(engine.suggest(word, limit))
    }

    /// [`Self::suggest`] with the engine's default limit.
    pub fn suggest_default(&self, word: &str) -> Result<Vec<String>, NotReady> {
        let limit = self.ready_engine()?.options().default_suggestion_limit;
        self.suggest(word, limit)
    }

    /// Accept `word` for the rest of the session.
    pub fn ignore_word(&self, word: &str) -> bool {
        self.overlay.ignore_for_session(self.clean(word))
    }

    /// Learn `word` permanently. The caller persists
    /// [`Self::custom_words`] afterwards.
    pub fn add_to_dictionary(&self, word: &str) -> bool {
        self.overlay.add_permanently(self.clean(word))
    }

    pub fn remove_from_dictionary(&self, word: &str) -> bool {
        self.overlay.remove_permanently(self.clean(word))
    }

    /// Reload words saved from an earlier session.
    pub fn restore_custom_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.overlay.extend_custom(words);
    }

    pub fn custom_words(&self) -> Vec<String> {
        self.overlay.custom_words()
    }
}
