// Case pattern detection and case re-application

use crate::character::{is_lower, is_upper, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "seattle".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Seattle".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "McDonald".
    Complex,
    /// All letters are uppercase: "SEATTLE".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Uppercase the first character, leaving the rest untouched: "iPhone" -> "IPhone".
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched: "SEattle" -> "sEattle".
pub fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep the first character as written and lowercase the rest: "SEATTLE" -> "Seattle".
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Re-apply the capitalization scheme of an input word to a generated
/// candidate.
///
/// - `AllUpper` -- the whole candidate is uppercased.
/// - `FirstUpper` -- the first character is uppercased, the rest is kept.
/// - anything else -- the candidate is returned unchanged.
pub fn restore_case(candidate: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::AllUpper => candidate.to_uppercase(),
        CaseType::FirstUpper => capitalize_first(candidate),
        CaseType::NoLetters | CaseType::AllLower | CaseType::Complex => candidate.to_string(),
    }
}

/// Check whether the first character of `word` is an uppercase letter.
pub fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(is_upper)
}

/// Uppercase a single character for insertion next to `left` and `right`.
///
/// The inserted letter is uppercased only when every existing neighbour
/// is uppercase (or caseless); a missing neighbour at a word edge does not
/// count against it.
pub fn case_for_neighbours(letter: char, left: Option<char>, right: Option<char>) -> char {
    let upper = |c: Option<char>| c.is_none_or(|c| !is_lower(c));
    if upper(left) && upper(right) {
        simple_upper(letter)
    } else {
        letter
    }
}
