//! Process-lifetime memo caches for provider lookups.
//!
//! Providers own one [`MemoCache`] each and hand it whatever the source
//! returned, success or failure. The first caller for a key computes the
//! value while holding the entry's shard lock, so concurrent callers for
//! the same key wait and then share that one result.

use dashmap::DashMap;
use std::hash::Hash;

/// Thread-safe memoization keyed by `K`.
pub struct MemoCache<K, V> {
    entries: DashMap<K, V>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Cached value for `key`, computing it with `init` on a miss.
    ///
    /// `init` must not call back into the same cache.
    pub fn get_or_insert_with(&self, key: K, init: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.entries.get(&key) {
            return hit.value().clone();
        }
        self.entries.entry(key).or_insert_with(init).value().clone()
    }

    pub fn invalidate(&self, key: &K) {
        self.entries.remove(key);
    }

}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
