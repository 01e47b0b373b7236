// Character case mapping and word-character classification

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. Edit generation works
// one character at a time, so the "simple" one-to-one mapping only takes the
// first character of the expansion.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c) || c == '\u{018F}' // LATIN CAPITAL LETTER SCHWA
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character survives `to_uppercase` unchanged.
///
/// Unlike [`is_upper`] this is also true for digits and punctuation, which
/// is what the insertion and substitution case heuristics want: a hyphen
/// next to an uppercase letter does not force the inserted letter down.
pub fn is_upper_or_caseless(c: char) -> bool {
    !is_lower(c)
}

/// Check whether a character counts as part of a word when trimming
/// surrounding punctuation.
///
/// Letters, digits and the underscore are word characters; everything else
/// (quotes, brackets, sentence punctuation, symbols) is not.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip leading and trailing non-word characters from `word`.
///
/// Inner punctuation such as the apostrophe in "don't" is preserved.
pub fn trim_non_word(word: &str) -> &str {
    word.trim_matches(|c: char| !is_word_char(c))
}
