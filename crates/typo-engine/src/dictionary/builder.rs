// Word-list expansion: applies affix rules to every listed stem

use tracing::{debug, warn};
use typo_core::enums::WordFlag;

use super::compound::{CompoundClasses, CompoundSet, class_codes};
use super::{Dictionary, FlagSet};
use crate::CompileError;
use crate::affix::AffixTable;

/// Upper bound on the capacity reserved from the advisory count line.
const MAX_RESERVED_WORDS: usize = 1 << 20;

/// Build the word table for `text` using the rules in `affixes`.
///
/// The first non-blank line is the advisory word count and only sizes the
/// table. Lines starting with a tab are annotations and are skipped;
/// anything after the first whitespace of a line is ignored.
///
/// `compound_size_limit` bounds the compiled size of each compound-rule
/// regex.
pub fn build_dictionary(
    text: &str,
    affixes: &AffixTable,
    compound_size_limit: usize,
) -> Result<Dictionary, CompileError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());

    let Some(count_line) = lines.next() else {
        return Err(CompileError::MalformedDictionarySource {
            line: 1,
            reason: "missing word count line".to_string(),
        });
    };
    let capacity = match count_line.trim().parse::<usize>() {
        Ok(count) => count.min(MAX_RESERVED_WORDS),
        Err(_) => {
            warn!(line = count_line.trim(), "word count line is not a number, ignored");
            0
        }
    };

    let mut class_set = class_codes(affixes.compound_rules());
    if let Some(code) = affixes.flag_code(WordFlag::OnlyInCompound) {
        class_set.insert(code.to_string());
    }
    let mut expander = Expander {
        affixes,
        need_affix: affixes.flag_code(WordFlag::NeedAffix),
        dictionary: Dictionary::with_capacity(capacity),
        classes: CompoundClasses::new(class_set),
    };

    for line in lines {
        if line.starts_with('\t') {
            continue;
        }
        let Some(head) = line.split_whitespace().next() else {
            continue;
        };
        match head.split_once('/') {
            Some((word, codes)) => expander.add_listing(word, affixes.split_codes(codes)),
            None => expander.add_listing(head, FlagSet::new()),
        }
    }

    let Expander {
        mut dictionary,
        classes,
        ..
    } = expander;
    let compounds = CompoundSet::compile(affixes.compound_rules(), &classes, compound_size_limit)?;
    debug!(
        words = dictionary.len(),
        compound_matchers = compounds.len(),
        "word list expanded"
    );
    dictionary.set_compounds(compounds);
    Ok(dictionary)
}

struct Expander<'a> {
    affixes: &'a AffixTable,
    need_affix: Option<&'a str>,
    dictionary: Dictionary,
    classes: CompoundClasses,
}

impl Expander<'_> {
    /// Insert one word-list line and every form its codes derive.
    fn add_listing(&mut self, word: &str, codes: FlagSet) {
        if word.is_empty() {
            return;
        }
        if codes.is_empty() {
            self.dictionary.insert(word, codes);
            return;
        }

        let needs_affix = self
            .need_affix
            .is_some_and(|flag| codes.iter().any(|code| code == flag));
        if !needs_affix {
            self.dictionary.insert(word, codes.clone());
        }

        let affixes = self.affixes;
        for (i, code) in codes.iter().enumerate() {
            if let Some(rule) = affixes.rule(code) {
                for derived in affixes.apply_rule(word, rule) {
                    // One prefix plus one suffix: later codes of the opposite
                    // kind are applied once to each derived form.
                    for other in codes[i + 1..].iter().filter_map(|c| affixes.rule(c)) {
                        if !rule.combines_with(other) {
                            continue;
                        }
                        for combined in affixes.apply_rule(&derived, other) {
                            self.dictionary.insert(&combined, FlagSet::new());
                        }
                    }
                    self.dictionary.insert(&derived, FlagSet::new());
                }
            }
            self.classes.record(code, word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::compile_affixes;
    use crate::dictionary::WordEntry;

    const LIMIT: usize = 1 << 20;

    fn build(aff: &str, dic: &str) -> Dictionary {
        let affixes = compile_affixes(aff).unwrap();
        build_dictionary(dic, &affixes, LIMIT).unwrap()
    }

    #[test]
    fn missing_count_line_is_an_error() {
        let affixes = compile_affixes("").unwrap();
        let err = build_dictionary("", &affixes, LIMIT).unwrap_err();
        assert!(matches!(err, CompileError::MalformedDictionarySource { line: 1, .. }));
        assert!(build_dictionary("\n  \n", &affixes, LIMIT).is_err());
    }

    #[test]
    fn count_only_gives_empty_dictionary() {
        let dict = build("", "0\n");
        assert!(dict.is_empty());
    }

    #[test]
    fn non_numeric_count_is_tolerated() {
        let dict = build("", "many\nhello\n");
        assert!(dict.contains("hello"));
        assert!(!dict.contains("many"));
    }

    #[test]
    fn bare_words_and_annotations() {
        let dict = build("", "3\nhello\nworld po:noun\n\tannotation\n\n");
        assert_eq!(dict.lookup("hello"), Some(&WordEntry::Bare));
        assert_eq!(dict.lookup("world"), Some(&WordEntry::Bare));
        assert!(!dict.contains("annotation"));
        assert!(!dict.contains("po:noun"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn suffix_expansion() {
        let dict = build("SFX D Y 1\nSFX D 0 ed [^ey]\n", "1\nwalk/D\n");
        assert_eq!(
            dict.lookup("walk"),
            Some(&WordEntry::Flagged(vec![vec!["D".to_string()]]))
        );
        assert_eq!(dict.lookup("walked"), Some(&WordEntry::Bare));
        assert!(!dict.contains("walkeded"));
    }

    #[test]
    fn need_affix_hides_stem() {
        let aff = "NEEDAFFIX X\nSFX S Y 1\nSFX S 0 s .\n";
        let dict = build(aff, "1\nfoo/XS\n");
        assert!(!dict.contains("foo"));
        assert!(dict.contains("foos"));
    }

    #[test]
    fn prefix_and_suffix_cross_combine() {
        let aff = "PFX U Y 1\nPFX U 0 un .\nSFX D Y 1\nSFX D 0 ed .\n";
        let dict = build(aff, "1\ndo/UD\n");
        assert!(dict.contains("undo"));
        assert!(dict.contains("doed"));
        assert!(dict.contains("undoed"));
    }

    #[test]
    fn non_combineable_rules_do_not_cross() {
        let aff = "PFX U N 1\nPFX U 0 un .\nSFX D Y 1\nSFX D 0 ed .\n";
        let dict = build(aff, "1\ndo/UD\n");
        assert!(dict.contains("undo"));
        assert!(dict.contains("doed"));
        assert!(!dict.contains("undoed"));
    }

    #[test]
    fn cross_combination_only_looks_forward() {
        // The suffix code comes first, the prefix is applied to its forms
        let aff = "PFX U Y 1\nPFX U 0 un .\nSFX D Y 1\nSFX D 0 ed .\n";
        let dict = build(aff, "1\ndo/DU\n");
        assert!(dict.contains("undoed"));
    }

    #[test]
    fn unknown_codes_are_kept_but_not_applied() {
        let dict = build("", "1\nfoo/Q\n");
        assert!(dict.lookup("foo").unwrap().has_code("Q"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn long_flags_decode_codes() {
        let aff = "FLAG long\nSFX Aa Y 1\nSFX Aa 0 s .\n";
        let dict = build(aff, "1\ncat/AaBb\n");
        assert!(dict.contains("cats"));
        let entry = dict.lookup("cat").unwrap();
        assert!(entry.has_code("Aa"));
        assert!(entry.has_code("Bb"));
    }

    #[test]
    fn compound_classes_collect_base_words() {
        let aff = "ONLYINCOMPOUND c\nCOMPOUNDMIN 1\nCOMPOUNDRULE 1\nCOMPOUNDRULE n*1t\n";
        let dic = "5\n0/nm\n1/n1\n2/nm\n1th/tc\nst/tc\n";
        let dict = build(aff, dic);
        let compounds = dict.compounds();
        assert_eq!(compounds.len(), 1);
        assert!(compounds.matches("21st"));
        assert!(compounds.matches("11th"));
        assert!(!compounds.matches("1th"));
        assert!(!compounds.matches("22"));
    }

    #[test]
    fn compound_rule_with_empty_class_is_dropped() {
        let aff = "COMPOUNDRULE 1\nCOMPOUNDRULE xy\n";
        let dict = build(aff, "1\nfoo/x\n");
        assert!(dict.compounds().is_empty());
    }

    #[test]
    fn leading_bom_and_crlf() {
        let dict = build("", "\u{FEFF}2\r\nalpha\r\nbeta\r\n");
        assert!(dict.contains("alpha"));
        assert!(dict.contains("beta"));
    }
}
