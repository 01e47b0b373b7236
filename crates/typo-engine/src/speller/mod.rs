// Word membership

pub mod checker;

pub use checker::WordChecker;

use typo_core::enums::WordFlag;

/// Trait for word membership checks.
///
/// The suggestion engine only sees this trait, so candidate validation can
/// be driven by any implementation, including test doubles.
pub trait Speller {
    /// Whether `word` is correct, allowing the case-folded fallbacks.
    fn is_correct(&self, word: &str) -> bool;

    /// Whether `word` is correct exactly as written.
    fn check_exact(&self, word: &str) -> bool;

    /// Whether any listing of the exact form `word` carries the rule code
    /// declared for `flag`. False when the flag is not declared.
    fn has_flag(&self, word: &str, flag: WordFlag) -> bool;
}
