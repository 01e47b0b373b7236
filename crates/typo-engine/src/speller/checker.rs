// Word Checker: exact, case-folded and compound membership

use hashbrown::HashMap;
use typo_core::case::{CaseType, detect_case, lowercase_first, starts_upper, title_case};
use typo_core::enums::WordFlag;

use crate::affix::AffixTable;
use crate::dictionary::{Dictionary, WordEntry};
use crate::speller::Speller;

/// Checks words against a compiled [`Dictionary`].
///
/// Lookup order for [`Speller::is_correct`]:
///
/// 1. the trimmed word as written;
/// 2. for an all-caps word, the title-cased form ("SEATTLE" -> "Seattle"),
///    then the lowercase form; a title-cased form carrying `KEEPCASE`
///    rejects the word outright;
/// 3. otherwise, for a word starting with an uppercase letter, the form with
///    the first letter lowercased, again rejected if that form carries
///    `KEEPCASE`.
///
/// No other case permutations are tried.
#[derive(Debug, Clone)]
pub struct WordChecker {
    dictionary: Dictionary,
    codes: HashMap<WordFlag, String>,
    compound_min: Option<usize>,
}

impl WordChecker {
    /// Wrap `dictionary`, resolving per-word flag codes from `affixes`.
    pub fn new(dictionary: Dictionary, affixes: &AffixTable) -> Self {
        let codes = WordFlag::ALL
            .into_iter()
            .filter_map(|flag| Some((flag, affixes.flag_code(flag)?.to_string())))
            .collect();
        Self {
            dictionary,
            codes,
            compound_min: affixes.flags().compound_min(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Minimum character count for compound matching, `None` if disabled.
    pub fn compound_min(&self) -> Option<usize> {
        self.compound_min
    }

    fn code(&self, flag: WordFlag) -> Option<&str> {
        self.codes.get(&flag).map(String::as_str)
    }

    /// A listing is usable on its own unless it is marked `ONLYINCOMPOUND`.
    fn listed_standalone(&self, entry: &WordEntry) -> bool {
        match entry {
            WordEntry::Bare => true,
            WordEntry::Flagged(sets) => match self.code(WordFlag::OnlyInCompound) {
                None => true,
                Some(only) => sets.iter().any(|set| !set.iter().any(|c| c == only)),
            },
        }
    }

    fn matches_compound(&self, word: &str) -> bool {
        match self.compound_min {
            Some(min) if word.chars().count() >= min => {
                self.dictionary.compounds().matches(word)
            }
            _ => false,
        }
    }
}

impl Speller for WordChecker {
    fn is_correct(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        if self.check_exact(word) {
            return true;
        }

        if detect_case(word) == CaseType::AllUpper {
            let title = title_case(word);
            if self.has_flag(&title, WordFlag::KeepCase) {
                return false;
            }
            return self.check_exact(&title) || self.check_exact(&word.to_lowercase());
        }

        if starts_upper(word) {
            let lowered = lowercase_first(word);
            if self.has_flag(&lowered, WordFlag::KeepCase) {
                return false;
            }
            return self.check_exact(&lowered);
        }
        false
    }

    fn check_exact(&self, word: &str) -> bool {
        let listed = self
            .dictionary
            .lookup(word)
            .is_some_and(|entry| self.listed_standalone(entry));
        listed || self.matches_compound(word)
    }

    fn has_flag(&self, word: &str, flag: WordFlag) -> bool {
        let Some(code) = self.code(flag) else {
            return false;
        };
        self.dictionary
            .lookup(word)
            .is_some_and(|entry| entry.has_code(code))
    }
}
