//! Hunspell-format spell-checking engine.
//!
//! Compiles an affix file and a word list into an immutable lookup table,
//! answers membership queries and ranks correction candidates for
//! misspelled words.
//!
//! # Architecture
//!
//! - [`affix`] -- affix-file compiler: rules, compound rules, REP table, flags
//! - [`dictionary`] -- word-list expansion and compound-rule matchers
//! - [`speller`] -- word membership with the case-folding fallbacks
//! - [`suggestion`] -- edit-distance search, ranking and the suggestion cache
//! - [`overlay`] -- session ignore list and learned custom words
//! - [`checker`] -- caller-facing wrapper with explicit readiness
//! - [`engine`] -- the compiled [`Engine`] handle
//!
//! ```
//! use typo_engine::Engine;
//!
//! let aff = "TRY esianrtolcdugmphbyfvkwz\nSFX D Y 1\nSFX D 0 ed [^ey]\n";
//! let dic = "2\nwalk/D\nthe\n";
//! let engine = Engine::compile(aff, dic).unwrap();
//! assert!(engine.is_correct("walked"));
//! assert!(engine.suggest("teh", 3).contains(&"the".to_string()));
//! ```

pub mod affix;
pub mod checker;
pub mod dictionary;
pub mod engine;
pub mod options;
pub mod overlay;
pub mod speller;
pub mod suggestion;

pub use checker::{NotReady, SpellChecker};
pub use engine::Engine;
pub use options::{CheckerOptions, EngineOptions};
pub use overlay::SessionOverlay;

/// Error type for affix and word-list compilation.
///
/// Compilation is all-or-nothing: a partially built rule set would give
/// silently wrong verdicts, so any of these aborts the whole compile.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("malformed affix source at line {line}: {reason}")]
    MalformedAffixSource { line: usize, reason: String },
    #[error("invalid pattern {pattern:?} at affix line {line}: {source}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("malformed dictionary source at line {line}: {reason}")]
    MalformedDictionarySource { line: usize, reason: String },
    #[error("compound rule {rule:?} could not be compiled: {source}")]
    CompoundRule {
        rule: String,
        #[source]
        source: regex::Error,
    },
}
