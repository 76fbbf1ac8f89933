//! Per-view memoization of fetched pages.
//!
//! A [`PagedCache`] is owned by exactly one listing view and lives as long
//! as that view. It never evicts or invalidates: page counts are bounded by
//! the listing's fixed page size, and a fresh view starts with a fresh cache.

use std::collections::HashMap;

use super::types::{PageEntry, PageKey};

/// Maps page indices to previously fetched pages.
///
/// Each key holds at most one entry. Storing a page under an existing key
/// replaces it; the last write wins.
#[derive(Debug, Clone)]
pub struct PagedCache<T> {
    pages: HashMap<PageKey, PageEntry<T>>,
}

impl<T> Default for PagedCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PagedCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// Returns the page stored under `key`, if any.
    pub fn get(&self, key: PageKey) -> Option<&PageEntry<T>> {
        self.pages.get(&key)
    }

    /// Stores `value` under `key`, returning the page it replaced.
    pub fn put(&mut self, key: PageKey, value: PageEntry<T>) -> Option<PageEntry<T>> {
        self.pages.insert(key, value)
    }

    /// Returns true if a page is stored under `key`.
    pub fn contains(&self, key: PageKey) -> bool {
        self.pages.contains_key(&key)
    }

    /// Drops every stored page.
    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the stored page keys in ascending order.
    pub fn keys(&self) -> Vec<PageKey> {
        let mut keys: Vec<PageKey> = self.pages.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cache_is_empty() {
        let cache: PagedCache<&str> = PagedCache::new();

        assert!(cache.is_empty());
        for key in [0, 1, 2, 10, 1_000, PageKey::MAX] {
            assert!(cache.get(key).is_none());
            assert!(!cache.contains(key));
        }
    }

    #[test]
    fn test_put_then_get_returns_exact_page() {
        let mut cache = PagedCache::new();

        let previous = cache.put(0, PageEntry::new(vec!["a", "b"], 3));

        assert!(previous.is_none());
        assert_eq!(cache.get(0), Some(&PageEntry::new(vec!["a", "b"], 3)));
        assert!(cache.get(1).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_overwrites_last_write_wins() {
        let mut cache = PagedCache::new();
        cache.put(4, PageEntry::new(vec!["stale"], 5));

        let replaced = cache.put(4, PageEntry::new(vec!["fresh"], 6));

        assert_eq!(replaced, Some(PageEntry::new(vec!["stale"], 5)));
        assert_eq!(cache.get(4), Some(&PageEntry::new(vec!["fresh"], 6)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overlapping_fetches_keep_whichever_completes_last() {
        // Two requests for page 2 are in flight; the slower one lands second.
        let mut cache = PagedCache::new();
        let fast = PageEntry::new(vec![1, 2], 4);
        let slow = PageEntry::new(vec![1, 2, 3], 4);

        cache.put(2, fast);
        cache.put(2, slow.clone());

        assert_eq!(cache.get(2), Some(&slow));
    }

    #[test]
    fn test_pages_are_independent() {
        let mut cache = PagedCache::new();
        cache.put(0, PageEntry::new(vec![0], 2));
        cache.put(1, PageEntry::new(vec![1], 2));

        cache.put(1, PageEntry::new(vec![10], 2));

        assert_eq!(cache.get(0), Some(&PageEntry::new(vec![0], 2)));
        assert_eq!(cache.get(1), Some(&PageEntry::new(vec![10], 2)));
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut cache = PagedCache::new();
        for key in [7, 0, 3] {
            cache.put(key, PageEntry::new(Vec::<u8>::new(), 8));
        }

        assert_eq!(cache.keys(), vec![0, 3, 7]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = PagedCache::new();
        cache.put(0, PageEntry::new(vec!["a"], 1));
        cache.put(1, PageEntry::new(vec!["b"], 1));

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get(0).is_none());
        assert!(cache.get(1).is_none());
    }
}
