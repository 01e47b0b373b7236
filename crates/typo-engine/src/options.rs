// Engine and checker options

use serde::{Deserialize, Serialize};

/// Default number of suggestions returned by [`crate::Engine::suggest_default`].
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Default number of words kept in the suggestion cache.
pub const DEFAULT_SUGGESTION_CACHE_CAPACITY: usize = 1024;

/// Default compiled-size bound for one compound-rule regex (64 MiB).
pub const DEFAULT_COMPOUND_REGEX_SIZE_LIMIT: usize = 64 << 20;

/// Options fixed when an [`crate::Engine`] is compiled.
///
/// Field names are camelCase on the wire so a browser host can pass its
/// settings object straight through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Suggestions returned when the caller does not ask for a count.
    pub default_suggestion_limit: usize,
    /// Words kept in the suggestion cache; `None` never evicts, `Some(0)`
    /// disables the cache.
    pub suggestion_cache_capacity: Option<usize>,
    /// Compiled-size bound in bytes for each compound-rule matcher.
    pub compound_regex_size_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            suggestion_cache_capacity: Some(DEFAULT_SUGGESTION_CACHE_CAPACITY),
            compound_regex_size_limit: DEFAULT_COMPOUND_REGEX_SIZE_LIMIT,
        }
    }
}

/// Options for the caller-facing [`crate::SpellChecker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerOptions {
    /// Strip leading and trailing non-word characters before checking.
    pub strip_punctuation: bool,
    /// Accept input that is empty once stripped (e.g. a lone "--").
    pub accept_empty: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            strip_punctuation: true,
            accept_empty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_defaults() {
        let opts = EngineOptions::default();
        assert_eq!(opts.default_suggestion_limit, 5);
        assert_eq!(opts.suggestion_cache_capacity, Some(1024));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: EngineOptions =
            serde_json::from_str(r#"{"defaultSuggestionLimit": 8}"#).unwrap();
        assert_eq!(opts.default_suggestion_limit, 8);
        assert_eq!(opts.suggestion_cache_capacity, Some(1024));
        assert_eq!(opts.compound_regex_size_limit, DEFAULT_COMPOUND_REGEX_SIZE_LIMIT);
    }

    #[test]
    fn null_capacity_means_unbounded() {
        let opts: EngineOptions =
            serde_json::from_str(r#"{"suggestionCacheCapacity": null}"#).unwrap();
        assert_eq!(opts.suggestion_cache_capacity, None);
    }

    #[test]
    fn checker_options_round_trip_names() {
        let json = serde_json::to_string(&CheckerOptions::default()).unwrap();
        assert_eq!(json, r#"{"stripPunctuation":true,"acceptEmpty":true}"#);
        let opts: CheckerOptions = serde_json::from_str(r#"{"acceptEmpty":false}"#).unwrap();
        assert!(opts.strip_punctuation);
        assert!(!opts.accept_empty);
    }
}
