//! Selector caching for repeated renders.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::config::DEFAULT_SELECTOR_CACHE_CAPACITY;
use crate::selector::SelectorList;

/// Bounded LRU caches for selector text.
///
/// Two independent caches are keyed by the raw, untrimmed selector text of
/// a rule: one holds the split selector list, the other the canonical
/// display string. Both are pure functions of the key, so entries are only
/// ever evicted by capacity.
///
/// Lookups refresh recency, so both caches sit behind a mutex even for reads.
pub struct SelectorCache {
    /// Raw text to split selectors.
    lists: Mutex<LruCache<String, SelectorList>>,
    /// Raw text to selectors joined with `", "`.
    display: Mutex<LruCache<String, Arc<str>>>,
}

impl SelectorCache {
    /// Create a cache with the default capacity (3000 entries each).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SELECTOR_CACHE_CAPACITY)
    }

    /// Create a cache with a specific capacity per cache.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            lists: Mutex::new(LruCache::new(capacity)),
            display: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Get the selector list for raw selector text, splitting it on a miss.
    pub fn selectors(&self, selector_text: &str) -> SelectorList {
        let mut lists = self.lists.lock();
        if let Some(list) = lists.get(selector_text) {
            return list.clone();
        }

        tracing::trace!(selector_text, "selector list cache miss");
        let list = SelectorList::parse(selector_text);
        lists.put(selector_text.to_owned(), list.clone());
        list
    }

    /// Get the display string for raw selector text, joining it on a miss.
    pub fn cleaned_text(&self, selector_text: &str) -> Arc<str> {
        if let Some(text) = self.display.lock().get(selector_text) {
            return Arc::clone(text);
        }

        tracing::trace!(selector_text, "selector display cache miss");
        let text: Arc<str> = self.selectors(selector_text).joined().into();
        self.display
            .lock()
            .put(selector_text.to_owned(), Arc::clone(&text));
        text
    }

    /// Check for a cached selector list without refreshing its recency.
    pub fn contains_selectors(&self, selector_text: &str) -> bool {
        self.lists.lock().contains(selector_text)
    }

    /// Check for a cached display string without refreshing its recency.
    pub fn contains_cleaned_text(&self, selector_text: &str) -> bool {
        self.display.lock().contains(selector_text)
    }

    /// Number of cached selector lists.
    pub fn len(&self) -> usize {
        self.lists.lock().len()
    }

    /// Check if no selector lists are cached.
    pub fn is_empty(&self) -> bool {
        self.lists.lock().is_empty()
    }

    /// Capacity of each cache.
    pub fn capacity(&self) -> usize {
        self.lists.lock().cap().get()
    }
}

impl Default for SelectorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectorCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorCache")
            .field("lists", &self.lists.lock().len())
            .field("display", &self.display.lock().len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_basic_operations() {
        let cache = SelectorCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 3000);

        let first = cache.selectors("h1, h2");
        let second = cache.selectors("h1, h2");
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        assert_eq!(&*cache.cleaned_text(" h1 ,h2 "), "h1, h2");
        assert!(cache.contains_cleaned_text(" h1 ,h2 "));
        // The display lookup split the raw key through the list cache.
        assert!(cache.contains_selectors(" h1 ,h2 "));
    }

    #[test]
    fn keys_are_untrimmed() {
        let cache = SelectorCache::new();
        cache.selectors("a");
        cache.selectors(" a");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn evicts_least_recently_used() {
        let cache = SelectorCache::with_capacity(3000);
        for i in 0..3000 {
            cache.selectors(&format!(".c{i}"));
        }
        assert_eq!(cache.len(), 3000);

        // Touch the oldest entry so `.c1` becomes least recently used.
        cache.selectors(".c0");
        cache.selectors(".c3000");

        assert_eq!(cache.len(), 3000);
        assert!(cache.contains_selectors(".c0"));
        assert!(!cache.contains_selectors(".c1"));
        assert!(cache.contains_selectors(".c3000"));
    }

    #[test]
    fn zero_capacity_holds_one_entry() {
        let cache = SelectorCache::with_capacity(0);
        cache.selectors("a");
        cache.selectors("b");
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_selectors("b"));
    }
}
