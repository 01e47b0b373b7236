// Compound-rule matchers
//
// A COMPOUNDRULE is a sequence of class symbols, each optionally followed by
// `*` or `?`. Once every word-list line has been read, each symbol is
// replaced by an alternation of the words recorded in its class and the
// whole rule is compiled to one anchored, case-insensitive regex.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::CompileError;

/// One class reference inside a compound rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Rule code naming the word class.
    pub code: String,
    /// `*` or `?` following the symbol.
    pub quantifier: Option<char>,
}

impl Symbol {
    fn optional(&self) -> bool {
        self.quantifier.is_some()
    }
}

/// Split a compound rule into its class symbols.
///
/// Parenthesised groups name multi-character codes (`(aa)(bb)*`); any other
/// character is a one-character code. A quantifier with no preceding
/// symbol is dropped.
pub fn parse_symbols(rule: &str) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::new();
    let mut chars = rule.chars().peekable();
    while let Some(c) = chars.next() {
        let code = match c {
            '*' | '?' => continue,
            '(' => {
                let mut code = String::new();
                for inner in chars.by_ref() {
                    if inner == ')' {
                        break;
                    }
                    code.push(inner);
                }
                code
            }
            other => other.to_string(),
        };
        let quantifier = chars.next_if(|q| matches!(q, '*' | '?'));
        symbols.push(Symbol { code, quantifier });
    }
    symbols
}

/// Every class code referenced by `rules`.
pub fn class_codes<'a>(rules: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
    rules
        .into_iter()
        .flat_map(|rule| parse_symbols(rule))
        .map(|symbol| symbol.code)
        .collect()
}

/// Word classes collected while reading the word list, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct CompoundClasses {
    members: HashMap<String, BTreeSet<String>>,
}

impl CompoundClasses {
    /// Track the given codes; words listed with any other code are ignored.
    pub fn new(codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            members: codes.into_iter().map(|code| (code, BTreeSet::new())).collect(),
        }
    }

    /// Record `word` under `code` if `code` names a tracked class.
    pub fn record(&mut self, code: &str, word: &str) {
        if let Some(class) = self.members.get_mut(code) {
            class.insert(word.to_string());
        }
    }

    /// Members of `code`, or `None` when the class is unknown or empty.
    pub fn members(&self, code: &str) -> Option<&BTreeSet<String>> {
        self.members.get(code).filter(|class| !class.is_empty())
    }
}

/// A compiled compound rule.
#[derive(Debug, Clone)]
struct CompoundMatcher {
    regex: Regex,
}

impl CompoundMatcher {
    fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

/// Build the regex source for one rule, or `None` when a required class
/// has no members.
fn rule_pattern(rule: &str, classes: &CompoundClasses) -> Option<String> {
    let mut body = String::new();
    for symbol in parse_symbols(rule) {
        let Some(members) = classes.members(&symbol.code) else {
            if symbol.optional() {
                continue;
            }
            return None;
        };
        let alternation: Vec<String> = members.iter().map(|w| regex::escape(w)).collect();
        body.push_str("(?:");
        body.push_str(&alternation.join("|"));
        body.push(')');
        if let Some(q) = symbol.quantifier {
            body.push(q);
        }
    }
    if body.is_empty() {
        return None;
    }
    Some(format!("^(?:{body})$"))
}

/// All compound matchers of a dictionary.
#[derive(Debug, Clone, Default)]
pub struct CompoundSet {
    matchers: Vec<CompoundMatcher>,
}

impl CompoundSet {
    /// Compile `rules` against the collected word classes.
    ///
    /// A rule whose required class ended up empty can never match and is
    /// dropped with a warning. `size_limit` bounds each compiled regex.
    pub fn compile(
        rules: &[String],
        classes: &CompoundClasses,
        size_limit: usize,
    ) -> Result<Self, CompileError> {
        let mut matchers = Vec::with_capacity(rules.len());
        for rule in rules {
            let Some(pattern) = rule_pattern(rule, classes) else {
                warn!(rule = rule.as_str(), "compound rule references an empty word class, dropped");
                continue;
            };
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .size_limit(size_limit)
                .build()
                .map_err(|source| CompileError::CompoundRule {
                    rule: rule.clone(),
                    source,
                })?;
            matchers.push(CompoundMatcher { regex });
        }
        Ok(Self { matchers })
    }

    /// Whether any compound rule matches the whole of `word`.
    pub fn matches(&self, word: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(word))
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
