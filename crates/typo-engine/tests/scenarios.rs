//! End-to-end scenarios over a small English dictionary.
//!
//! `tests/data/golden.json` lists words the engine must accept, words it
//! must reject, and suggestion expectations for `tests/data/en_mini.*`.
//!
//! Run: cargo test -p typo-engine --test scenarios

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use typo_engine::{CompileError, Engine, EngineOptions, SpellChecker};

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Golden {
    correct: Vec<String>,
    incorrect: Vec<String>,
    suggestions: Vec<SuggestionCase>,
}

#[derive(Debug, Deserialize)]
struct SuggestionCase {
    word: String,
    limit: usize,
    #[serde(default)]
    exact: Option<Vec<String>>,
    #[serde(default)]
    contains: Vec<String>,
    #[serde(default)]
    excludes: Vec<String>,
}

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn read_data(name: &str) -> String {
    let path = data_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn load_golden() -> Golden {
    serde_json::from_str(&read_data("golden.json"))
        .unwrap_or_else(|e| panic!("failed to parse golden.json: {}", e))
}

fn english() -> Engine {
    Engine::compile(&read_data("en_mini.aff"), &read_data("en_mini.dic"))
        .unwrap_or_else(|e| panic!("failed to compile en_mini: {}", e))
}

// ---------------------------------------------------------------------------
// Golden fixture
// ---------------------------------------------------------------------------

#[test]
fn golden_correct_words() {
    let engine = english();
    let golden = load_golden();
    let failures: Vec<&String> = golden
        .correct
        .iter()
        .filter(|w| !engine.is_correct(w))
        .collect();
    assert!(failures.is_empty(), "rejected: {:?}", failures);
}

#[test]
fn golden_incorrect_words() {
    let engine = english();
    let golden = load_golden();
    let failures: Vec<&String> = golden
        .incorrect
        .iter()
        .filter(|w| engine.is_correct(w))
        .collect();
    assert!(failures.is_empty(), "accepted: {:?}", failures);
}

#[test]
fn golden_suggestions() {
    let engine = english();
    for case in load_golden().suggestions {
        let got = engine.suggest(&case.word, case.limit);

        assert!(got.len() <= case.limit, "{}: too many: {:?}", case.word, got);
        assert!(!got.contains(&case.word), "{}: input suggested", case.word);
        let unique: HashSet<&String> = got.iter().collect();
        assert_eq!(unique.len(), got.len(), "{}: duplicates: {:?}", case.word, got);
        for s in &got {
            assert!(!engine.has_flag(s, "NOSUGGEST"), "{}: NOSUGGEST {}", case.word, s);
        }

        if let Some(exact) = &case.exact {
            assert_eq!(&got, exact, "{}", case.word);
        }
        for want in &case.contains {
            assert!(got.contains(want), "{}: missing {} in {:?}", case.word, want, got);
        }
        for unwanted in &case.excludes {
            assert!(!got.contains(unwanted), "{}: unexpected {}", case.word, unwanted);
        }
    }
}

// ---------------------------------------------------------------------------
// Behaviour scenarios
// ---------------------------------------------------------------------------

#[test]
fn suffix_rule_scenario() {
    let engine = Engine::compile("SFX D Y 1\nSFX D 0 ed [^ey]\n", "1\nwalk/D\n").unwrap();
    assert!(engine.is_correct("walked"));
    assert!(!engine.is_correct("walkeded"));
}

#[test]
fn keepcase_blocks_all_caps_fallback() {
    let plain = Engine::compile("", "1\nSeattle\n").unwrap();
    assert!(plain.is_correct("SEATTLE"));
    let kept = Engine::compile("KEEPCASE K\n", "1\nSeattle/K\n").unwrap();
    assert!(kept.is_correct("Seattle"));
    assert!(!kept.is_correct("SEATTLE"));
}

#[test]
fn lowercase_input_is_not_capitalized() {
    let engine = Engine::compile("", "1\nSeattle\n").unwrap();
    assert!(!engine.is_correct("seattle"));
}

#[test]
fn compiling_twice_gives_identical_verdicts() {
    let a = english();
    let b = english();
    let golden = load_golden();
    for word in golden.correct.iter().chain(&golden.incorrect) {
        assert_eq!(a.is_correct(word), b.is_correct(word), "{}", word);
    }
    assert_eq!(a.word_count(), b.word_count());
    assert_eq!(a.suggest("teh", 5), b.suggest("teh", 5));
}

#[test]
fn repeated_suggestions_are_identical() {
    let engine = english();
    let first = engine.suggest("walkd", 3);
    assert_eq!(engine.suggest("walkd", 3), first);
    assert_eq!(engine.cached_suggestions("walkd").map(|c| c.limit), Some(3));
}

#[test]
fn larger_limit_reuses_only_short_lists() {
    let engine = english();
    let first = engine.suggest("teh", 3);
    let _ = engine.suggest("teh", 10);
    let cached = engine.cached_suggestions("teh").unwrap();
    if first.len() < 3 {
        assert_eq!(cached.limit, 3);
        assert_eq!(cached.suggestions, first);
    } else {
        assert_eq!(cached.limit, 10);
    }
}

#[test]
fn cache_can_be_disabled() {
    let options = EngineOptions {
        suggestion_cache_capacity: Some(0),
        ..EngineOptions::default()
    };
    let engine = Engine::compile_with_options(
        &read_data("en_mini.aff"),
        &read_data("en_mini.dic"),
        options,
    )
    .unwrap();
    let a = engine.suggest("teh", 3);
    assert!(engine.cached_suggestions("teh").is_none());
    assert_eq!(engine.suggest("teh", 3), a);
}

#[test]
fn all_caps_of_correct_words_are_correct() {
    let engine = english();
    for word in ["the", "walked", "Seattle", "cities", "unkindness", "played"] {
        assert!(engine.is_correct(word), "{}", word);
        assert!(engine.is_correct(&word.to_uppercase()), "{}", word);
    }
}

#[test]
fn long_flag_dictionary() {
    let aff = "FLAG long\nKEEPCASE Kc\nSFX Ss Y 1\nSFX Ss 0 s .\nPFX Un Y 1\nPFX Un 0 un .\n";
    let dic = "2\nlock/UnSs\nLondon/Kc\n";
    let engine = Engine::compile(aff, dic).unwrap();
    assert!(engine.is_correct("locks"));
    assert!(engine.is_correct("unlocks"));
    assert!(engine.is_correct("London"));
    assert!(!engine.is_correct("LONDON"));
}

#[test]
fn numeric_flag_dictionary() {
    let aff = "FLAG num\nSFX 101 Y 1\nSFX 101 0 ing .\n";
    let engine = Engine::compile(aff, "1\nsing/101,7\n").unwrap();
    assert!(engine.is_correct("singing"));
}

#[test]
fn utf8_flag_dictionary() {
    let aff = "FLAG UTF-8\nSFX \u{00DF} Y 1\nSFX \u{00DF} 0 en .\n";
    let engine = Engine::compile(aff, "1\nhaus/\u{00DF}\n").unwrap();
    assert!(engine.is_correct("hausen"));
}

#[test]
fn malformed_sources_fail_to_compile() {
    let overrun = Engine::compile("PFX A Y 5\nPFX A 0 re .\n", "1\nx\n");
    assert!(matches!(overrun, Err(CompileError::MalformedAffixSource { .. })));

    let bad_pattern = Engine::compile("SFX A Y 1\nSFX A 0 s (\n", "1\nx\n");
    assert!(matches!(bad_pattern, Err(CompileError::InvalidPattern { .. })));

    let no_count = Engine::compile("", "");
    assert!(matches!(no_count, Err(CompileError::MalformedDictionarySource { .. })));
}

#[test]
fn engine_shared_across_threads() {
    let engine = Arc::new(english());
    let handles: Vec<_> = ["teh", "walkd", "Seatle", "teh"]
        .into_iter()
        .map(|word| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || (word, engine.suggest(word, 3)))
        })
        .collect();
    for handle in handles {
        let (word, got) = handle.join().unwrap();
        assert!(got.len() <= 3);
        assert_eq!(engine.suggest(word, 3), got);
    }
}

#[test]
fn spell_checker_session() {
    let mut checker = SpellChecker::new();
    assert!(checker.check("the").is_err());
    checker
        .load(&read_data("en_mini.aff"), &read_data("en_mini.dic"))
        .unwrap();

    assert_eq!(checker.check("\"Walked,\""), Ok(true));
    assert_eq!(checker.check("Zaphod"), Ok(false));
    checker.ignore_word("Zaphod");
    assert_eq!(checker.check("Zaphod"), Ok(true));

    checker.add_to_dictionary("Rustacean");
    assert_eq!(checker.check("rustaceans"), Ok(false));
    assert_eq!(checker.check("RUSTACEAN"), Ok(true));

    let saved = checker.custom_words();
    let mut next = SpellChecker::new();
    next.restore_custom_words(&saved);
    next.load(&read_data("en_mini.aff"), &read_data("en_mini.dic"))
        .unwrap();
    assert_eq!(next.check("rustacean"), Ok(true));
    assert_eq!(next.check("Zaphod"), Ok(false));
}
