// Session Dictionary Overlay: session ignore list and learned custom words

use hashbrown::HashSet;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct OverlayInner {
    /// Exact forms the user chose to ignore until the session ends.
    ignored: HashSet<String>,
    /// Lowercased words the user added to their dictionary.
    custom: HashSet<String>,
}

/// Words accepted on top of the compiled dictionary.
///
/// The overlay is consulted before the engine: an ignored word matches
/// only as written, a custom word matches in any casing. Custom words are
/// meant to outlive the session; persisting them is up to the caller (see
/// [`SessionOverlay::custom_words`] and [`SessionOverlay::with_custom_words`]).
///
/// Mutations take a write lock, so one writer and any number of
/// concurrent readers are safe.
#[derive(Debug, Default)]
pub struct SessionOverlay {
    inner: RwLock<OverlayInner>,
}

impl SessionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an overlay preloaded with previously saved custom words.
    pub fn with_custom_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let overlay = Self::new();
        overlay.extend_custom(words);
        overlay
    }

    /// Accept `word`, exactly as written, until [`Self::clear_session`].
    ///
    /// Returns `false` if the word was blank or already ignored.
    pub fn ignore_for_session(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.inner.write().ignored.insert(word.to_string())
    }

    /// Learn `word` in every casing.
    ///
    /// Returns `false` if the word was blank or already known.
    pub fn add_permanently(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.inner.write().custom.insert(word.to_lowercase())
    }

    /// Forget a learned word. Returns whether it was present.
    pub fn remove_permanently(&self, word: &str) -> bool {
        self.inner.write().custom.remove(&word.to_lowercase())
    }

    /// Add previously saved custom words.
    pub fn extend_custom<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = self.inner.write();
        inner.custom.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.inner.read().ignored.contains(word)
    }

    pub fn is_custom(&self, word: &str) -> bool {
        self.inner.read().custom.contains(&word.to_lowercase())
    }

    /// Whether the overlay alone accepts `word`.
    pub fn accepts(&self, word: &str) -> bool {
        let inner = self.inner.read();
        inner.ignored.contains(word) || inner.custom.contains(&word.to_lowercase())
    }

    /// Learned words in sorted order, for the caller to persist.
    pub fn custom_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.inner.read().custom.iter().cloned().collect();
        words.sort();
        words
    }

    /// Drop the session ignore list; learned words are kept.
    pub fn clear_session(&self) {
        self.inner.write().ignored.clear();
    }
}
