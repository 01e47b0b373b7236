// WASM bindings for the typo spell checker.
//
// Provides a `WasmSpellChecker` class exported via wasm-bindgen that wraps
// `SpellChecker` from typo-engine. Options and structured return values
// cross the boundary as plain JavaScript objects via serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const checker = new WasmSpellChecker(affText, dicText, { engine: { defaultSuggestionLimit: 3 } });
//   checker.isCorrect("walked");      // => true
//   checker.suggest("teh");           // => ["the", ...]
//   checker.addToDictionary("Ferris");
//   checker.customWords();            // => ["ferris"]
//   checker.info();                   // => { wordCount: 1234, ruleCount: 40 }

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use typo_engine::{CheckerOptions, CompileError, EngineOptions, NotReady, SpellChecker};

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// Constructor options. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsOptions {
    engine: EngineOptions,
    checker: CheckerOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsInfo {
    word_count: usize,
    rule_count: usize,
    custom_word_count: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn compile_error_to_js(e: CompileError) -> JsError {
    JsError::new(&e.to_string())
}

fn not_ready_to_js(e: NotReady) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_options(options: JsValue) -> Result<JsOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(JsOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmSpellChecker
// ============================================================================

/// Spell checker for WebAssembly.
///
/// Compiled from the text of a Hunspell-style affix file and word list.
#[wasm_bindgen]
pub struct WasmSpellChecker {
    checker: SpellChecker,
    engine_options: EngineOptions,
}

#[wasm_bindgen]
impl WasmSpellChecker {
    /// Compile a checker.
    ///
    /// - `aff`: affix file text
    /// - `dic`: word list text
    /// - `options`: optional `{ engine, checker }` object
    #[wasm_bindgen(constructor)]
    pub fn new(aff: &str, dic: &str, options: JsValue) -> Result<WasmSpellChecker, JsError> {
        let options = parse_options(options)?;
        let mut checker = SpellChecker::with_options(options.checker);
        checker
            .load_with_options(aff, dic, options.engine.clone())
            .map_err(compile_error_to_js)?;
        Ok(WasmSpellChecker {
            checker,
            engine_options: options.engine,
        })
    }

    /// Replace the dictionary, keeping learned and ignored words.
    ///
    /// If compiling fails the checker stays unusable until a later reload
    /// succeeds.
    pub fn reload(&mut self, aff: &str, dic: &str) -> Result<(), JsError> {
        self.checker
            .load_with_options(aff, dic, self.engine_options.clone())
            .map_err(compile_error_to_js)
    }

    /// Check whether a word is correctly spelled.
    #[wasm_bindgen(js_name = "isCorrect")]
    pub fn is_correct(&self, word: &str) -> Result<bool, JsError> {
        self.checker.check(word).map_err(not_ready_to_js)
    }

    /// Spelling corrections for `word`, best first.
    ///
    /// `limit` defaults to the engine's `defaultSuggestionLimit`.
    pub fn suggest(&self, word: &str, limit: Option<usize>) -> Result<Vec<String>, JsError> {
        match limit {
            Some(limit) => self.checker.suggest(word, limit),
            None => self.checker.suggest_default(word),
        }
        .map_err(not_ready_to_js)
    }

    /// Accept a word, exactly as written, for the rest of the session.
    #[wasm_bindgen(js_name = "ignoreWord")]
    pub fn ignore_word(&self, word: &str) -> bool {
        self.checker.ignore_word(word)
    }

    /// Learn a word in every casing.
    #[wasm_bindgen(js_name = "addToDictionary")]
    pub fn add_to_dictionary(&self, word: &str) -> bool {
        self.checker.add_to_dictionary(word)
    }

    #[wasm_bindgen(js_name = "removeFromDictionary")]
    pub fn remove_from_dictionary(&self, word: &str) -> bool {
        self.checker.remove_from_dictionary(word)
    }

    /// Learned words, sorted, for the host to persist.
    #[wasm_bindgen(js_name = "customWords")]
    pub fn custom_words(&self) -> Vec<String> {
        self.checker.custom_words()
    }

    /// Restore words saved by an earlier session.
    #[wasm_bindgen(js_name = "loadCustomWords")]
    pub fn load_custom_words(&self, words: Vec<String>) {
        self.checker.restore_custom_words(words);
    }

    /// Forget the session ignore list.
    #[wasm_bindgen(js_name = "clearSession")]
    pub fn clear_session(&self) {
        self.checker.overlay().clear_session();
    }

    #[wasm_bindgen(js_name = "clearSuggestionCache")]
    pub fn clear_suggestion_cache(&self) {
        if let Some(engine) = self.checker.engine() {
            engine.clear_suggestion_cache();
        }
    }

    /// Dictionary statistics as `{ wordCount, ruleCount, customWordCount }`.
    pub fn info(&self) -> Result<JsValue, JsError> {
        let (word_count, rule_count) = self
            .checker
            .engine()
            .map_or((0, 0), |e| (e.word_count(), e.rule_count()));
        let info = JsInfo {
            word_count,
            rule_count,
            custom_word_count: self.checker.custom_words().len(),
        };
        serde_wasm_bindgen::to_value(&info).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}
}
