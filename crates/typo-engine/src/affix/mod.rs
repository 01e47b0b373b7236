// Affix rule compiler
//
// Turns the text of a Hunspell affix file into prefix/suffix rules, compound
// rule patterns, the REP table and the keyword flag table.

pub mod flags;
mod parser;
pub mod rule;

pub use flags::FlagTable;
pub use parser::compile_affixes;
pub use rule::{AffixEntry, AffixRule, ReplacementPair};

use hashbrown::HashMap;
use typo_core::enums::{FlagMode, WordFlag};

/// Maximum number of rule applications chained through continuation
/// classes: the rule itself plus one continuation level.
pub const MAX_CONTINUATION_DEPTH: usize = 2;

/// Everything compiled from an affix file.
///
/// Immutable once built. The dictionary builder reads rules and flags from
/// it; the suggestion engine reads the REP table and the alphabet keywords.
#[derive(Debug, Clone)]
pub struct AffixTable {
    rules: HashMap<String, AffixRule>,
    compound_rules: Vec<String>,
    replacements: Vec<ReplacementPair>,
    flags: FlagTable,
    flag_mode: FlagMode,
}

impl AffixTable {
    /// The rule declared under `code`, if any.
    pub fn rule(&self, code: &str) -> Option<&AffixRule> {
        self.rules.get(code)
    }

    /// All rules in unspecified order.
    pub fn rules(&self) -> impl Iterator<Item = &AffixRule> {
        self.rules.values()
    }

    /// Number of distinct rule codes.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Raw `COMPOUNDRULE` patterns in file order.
    pub fn compound_rules(&self) -> &[String] {
        &self.compound_rules
    }

    /// `REP` pairs in file order.
    pub fn replacements(&self) -> &[ReplacementPair] {
        &self.replacements
    }

    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    /// Flag encoding fixed before any word list is parsed.
    pub fn flag_mode(&self) -> FlagMode {
        self.flag_mode
    }

    /// Decode a flag string from the word list into rule codes.
    pub fn split_codes(&self, text: &str) -> Vec<String> {
        self.flag_mode.split_codes(text)
    }

    /// Rule code declared for a per-word flag, e.g. the value of `KEEPCASE`.
    pub fn flag_code(&self, flag: WordFlag) -> Option<&str> {
        self.flags.code_for(flag)
    }

    /// Apply `rule` to `word`, following continuation classes.
    ///
    /// Each entry whose condition matches yields one derived form. A derived
    /// form is then fed once more through the rules its entry names as
    /// continuation classes; continuation classes of those rules are not
    /// followed. Codes that name no rule are skipped.
    pub fn apply_rule(&self, word: &str, rule: &AffixRule) -> Vec<String> {
        let mut out = Vec::new();
        self.apply_at_depth(word, rule, 1, &mut out);
        out
    }

    fn apply_at_depth(&self, word: &str, rule: &AffixRule, depth: usize, out: &mut Vec<String>) {
        for (entry, derived) in rule.derive_all(word) {
            if depth < MAX_CONTINUATION_DEPTH {
                for next in entry.continuation.iter().filter_map(|code| self.rule(code)) {
                    self.apply_at_depth(&derived, next, depth + 1, out);
                }
            }
            out.push(derived);
        }
    }
}
