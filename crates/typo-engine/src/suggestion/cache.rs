// Bounded per-word suggestion cache

use std::collections::VecDeque;

use hashbrown::HashMap;
use parking_lot::RwLock;

/// A cached suggestion list and the limit it was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSuggestions {
    pub suggestions: Vec<String>,
    pub limit: usize,
}

impl CachedSuggestions {
    /// Whether this entry answers a request for `limit` suggestions.
    ///
    /// A list computed for a larger limit covers any smaller one; a list
    /// shorter than its own limit is already everything there is.
    pub fn covers(&self, limit: usize) -> bool {
        limit <= self.limit || self.suggestions.len() < self.limit
    }
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, CachedSuggestions>,
    order: VecDeque<String>,
}

/// Suggestion lists keyed by the exact input word.
///
/// Entries are evicted oldest first once `capacity` is reached; `None`
/// keeps every entry and `Some(0)` disables caching. Concurrent callers
/// computing the same word race benignly: the last insert wins.
#[derive(Debug)]
pub struct SuggestionCache {
    inner: RwLock<CacheInner>,
    capacity: Option<usize>,
}

impl SuggestionCache {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            inner: RwLock::new(CacheInner::default()),
            capacity,
        }
    }

    /// Cached suggestions for `word`, truncated to `limit`, if the cached
    /// entry covers that limit.
    pub fn lookup(&self, word: &str, limit: usize) -> Option<Vec<String>> {
        let inner = self.inner.read();
        let cached = inner.entries.get(word)?;
        if !cached.covers(limit) {
            return None;
        }
        Some(cached.suggestions.iter().take(limit).cloned().collect())
    }

    /// The raw cache entry for `word`.
    pub fn get(&self, word: &str) -> Option<CachedSuggestions> {
        self.inner.read().entries.get(word).cloned()
    }

    pub fn insert(&self, word: &str, suggestions: Vec<String>, limit: usize) {
        if self.capacity == Some(0) {
            return;
        }
        let mut inner = self.inner.write();
        let entry = CachedSuggestions { suggestions, limit };
        if let Some(existing) = inner.entries.get_mut(word) {
            *existing = entry;
            return;
        }
        if let Some(capacity) = self.capacity {
            while inner.entries.len() >= capacity {
                let Some(oldest) = inner.order.pop_front() else {
                    break;
                };
                inner.entries.remove(&oldest);
            }
        }
        inner.entries.insert(word.to_string(), entry);
        inner.order.push_back(word.to_string());
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(None)
    }
}
