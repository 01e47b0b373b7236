// Single-edit candidate generators and the two-level edit search

use hashbrown::{HashMap, HashSet};
use typo_core::case::case_for_neighbours;
use typo_core::character::{is_upper_or_caseless, simple_upper};

use crate::speller::Speller;

/// Candidate string -> number of distinct edit paths that produced it.
pub type EditCounts = HashMap<String, usize>;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One class of single-character edit.
///
/// Generators push every variant they can make from `word` onto `out`,
/// once per edit path: the same string produced at two positions is pushed
/// twice, which is what the ranking counts.
pub trait EditGenerator: Send + Sync {
    fn generate(&self, word: &[char], alphabet: &[char], out: &mut Vec<String>);
}

fn splice(prefix: &[char], middle: &[char], suffix: &[char]) -> String {
    let mut s = String::with_capacity(prefix.len() + middle.len() + suffix.len());
    s.extend(prefix);
    s.extend(middle);
    s.extend(suffix);
    s
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Remove one character.
pub struct Deletion;

impl EditGenerator for Deletion {
    fn generate(&self, word: &[char], _alphabet: &[char], out: &mut Vec<String>) {
        for i in 0..word.len() {
            out.push(splice(&word[..i], &[], &word[i + 1..]));
        }
    }
}

/// Swap two adjacent, differing characters.
pub struct Transposition;

impl EditGenerator for Transposition {
    fn generate(&self, word: &[char], _alphabet: &[char], out: &mut Vec<String>) {
        for i in 0..word.len().saturating_sub(1) {
            let (a, b) = (word[i], word[i + 1]);
            if a != b {
                out.push(splice(&word[..i], &[b, a], &word[i + 2..]));
            }
        }
    }
}

/// Replace one character by an alphabet letter.
///
/// The letter is uppercased when the replaced character is uppercase (or
/// has no case); replacing a character by itself is skipped.
pub struct Substitution;

impl EditGenerator for Substitution {
    fn generate(&self, word: &[char], alphabet: &[char], out: &mut Vec<String>) {
        for (i, &current) in word.iter().enumerate() {
            let upper = is_upper_or_caseless(current);
            for &letter in alphabet {
                let letter = if upper { simple_upper(letter) } else { letter };
                if letter != current {
                    out.push(splice(&word[..i], &[letter], &word[i + 1..]));
                }
            }
        }
    }
}

/// Insert an alphabet letter at every position, including the end.
///
/// The letter is uppercased when its neighbours are uppercase.
pub struct Insertion;

impl EditGenerator for Insertion {
    fn generate(&self, word: &[char], alphabet: &[char], out: &mut Vec<String>) {
        for i in 0..=word.len() {
            let left = i.checked_sub(1).map(|j| word[j]);
            let right = word.get(i).copied();
            for &letter in alphabet {
                let letter = case_for_neighbours(letter, left, right);
                out.push(splice(&word[..i], &[letter], &word[i..]));
            }
        }
    }
}

/// The generators used by the default search, in application order.
pub fn default_generators() -> Vec<Box<dyn EditGenerator>> {
    vec![
        Box::new(Deletion),
        Box::new(Transposition),
        Box::new(Substitution),
        Box::new(Insertion),
    ]
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Runs a set of generators over a fixed alphabet.
pub struct EditSearch {
    generators: Vec<Box<dyn EditGenerator>>,
    alphabet: Vec<char>,
}

impl EditSearch {
    pub fn new(generators: Vec<Box<dyn EditGenerator>>, alphabet: Vec<char>) -> Self {
        Self {
            generators,
            alphabet,
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    fn variants(&self, word: &str, buffer: &mut Vec<String>) {
        let chars: Vec<char> = word.chars().collect();
        for generator in &self.generators {
            generator.generate(&chars, &self.alphabet, buffer);
        }
    }

    /// Every string one edit away from `word`, with its path count.
    pub fn edits1(&self, word: &str) -> EditCounts {
        let mut buffer = Vec::new();
        self.variants(word, &mut buffer);
        let mut counts = EditCounts::with_capacity(buffer.len());
        for variant in buffer {
            *counts.entry(variant).or_insert(0) += 1;
        }
        counts
    }

    /// Strings one edit away from any key of `ed1` that `speller` accepts,
    /// with their path counts. Each key of `ed1` is expanded once,
    /// regardless of its own count. Each distinct variant is checked at
    /// most once.
    pub fn edits2_known(&self, ed1: &EditCounts, speller: &dyn Speller) -> EditCounts {
        let mut counts = EditCounts::new();
        let mut rejected: HashSet<String> = HashSet::new();
        let mut buffer = Vec::new();
        for word in ed1.keys() {
            buffer.clear();
            self.variants(word, &mut buffer);
            for variant in buffer.drain(..) {
                if let Some(count) = counts.get_mut(&variant) {
                    *count += 1;
                } else if rejected.contains(&variant) {
                    continue;
                } else if speller.is_correct(&variant) {
                    counts.insert(variant, 1);
                } else {
                    rejected.insert(variant);
                }
            }
        }
        counts
    }
}
