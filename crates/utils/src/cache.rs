// This file is part of Feecast.
//
// Feecast is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Feecast is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Feecast.
// If not, see https://www.gnu.org/licenses/.

//! Caching utilities

use std::{
    fmt::{self, Debug, Formatter},
    hash::Hash,
};

use schnellru::{ByLength, LruMap, Unlimited};

/// Share of a [`TwoQueueCache`] reserved for entries seen only once.
const RECENT_RATIO: f64 = 0.25;
/// Size of the ghost queue relative to the cache capacity.
const GHOST_RATIO: f64 = 0.5;

/// A fixed size two-queue (2Q) cache.
///
/// New entries land in a small `recent` queue. An entry that is hit again, either while
/// still in `recent` or shortly after being evicted from it (tracked by key only in a ghost
/// queue), is promoted to the `frequent` queue. Scans of one-off keys therefore cannot
/// flush out entries that are revisited often.
pub struct TwoQueueCache<K, V>
where
    K: Hash + PartialEq,
{
    size: usize,
    recent_size: usize,
    recent: LruMap<K, V, Unlimited>,
    frequent: LruMap<K, V, Unlimited>,
    recent_evict: LruMap<K, (), ByLength>,
}

impl<K, V> TwoQueueCache<K, V>
where
    K: Hash + PartialEq + Clone,
{
    /// Create a cache holding at most `size` entries. A size of zero is treated as one.
    pub fn new(size: u32) -> Self {
        let size = size.max(1);
        let recent_size = ((size as f64 * RECENT_RATIO) as usize).max(1);
        let ghost_size = ((size as f64 * GHOST_RATIO) as u32).max(1);

        Self {
            size: size as usize,
            recent_size,
            recent: LruMap::new(Unlimited),
            frequent: LruMap::new(Unlimited),
            recent_evict: LruMap::new(ByLength::new(ghost_size)),
        }
    }

    /// Look up a key, updating its recency and promoting it to the frequent queue
    /// if it was only seen once before.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.frequent.peek(key).is_some() {
            return self.frequent.get(key).map(|v| &*v);
        }

        let value = self.recent.remove(key)?;
        self.frequent.insert(key.clone(), value);
        self.frequent.peek(key)
    }

    /// Look up a key without touching recency or frequency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.frequent.peek(key).or_else(|| self.recent.peek(key))
    }

    /// Add a value, evicting an older entry if the cache is full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.frequent.peek(&key).is_some() {
            self.frequent.insert(key, value);
            return;
        }

        if self.recent.remove(&key).is_some() {
            self.frequent.insert(key, value);
            return;
        }

        if self.recent_evict.remove(&key).is_some() {
            self.ensure_space(true);
            self.frequent.insert(key, value);
            return;
        }

        self.ensure_space(false);
        self.recent.insert(key, value);
    }

    /// Remove a key from the cache.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.recent_evict.remove(key);
        self.frequent
            .remove(key)
            .or_else(|| self.recent.remove(key))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.recent.len() + self.frequent.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.size
    }

    fn ensure_space(&mut self, recent_evict: bool) {
        let recent_len = self.recent.len();
        if recent_len + self.frequent.len() < self.size {
            return;
        }

        if recent_len > 0
            && (recent_len > self.recent_size
                || (recent_len == self.recent_size && !recent_evict))
        {
            if let Some((key, _)) = self.recent.pop_oldest() {
                self.recent_evict.insert(key, ());
            }
            return;
        }

        self.frequent.pop_oldest();
    }
}

impl<K, V> Debug for TwoQueueCache<K, V>
where
    K: Hash + PartialEq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoQueueCache")
            .field("size", &self.size)
            .field("recent", &self.recent.len())
            .field("frequent", &self.frequent.len())
            .field("recent_evict", &self.recent_evict.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_queue_never_exceeds_size() {
        let mut cache = TwoQueueCache::new(8);
        for i in 0..100_u32 {
            cache.insert(i, i);
            assert!(cache.len() <= 8);
        }
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.peek(&99), Some(&99));
    }

    #[test]
    fn test_two_queue_frequent_survives_scan() {
        let mut cache = TwoQueueCache::new(8);
        cache.insert(1000_u32, 1000_u32);
        // second touch promotes to the frequent queue
        assert_eq!(cache.get(&1000), Some(&1000));

        for i in 0..50 {
            cache.insert(i, i);
        }

        assert_eq!(cache.get(&1000), Some(&1000));
    }

    #[test]
    fn test_two_queue_ghost_hit_promotes() {
        let mut cache = TwoQueueCache::new(4);
        // recent queue holds one entry at this size
        cache.insert(1_u32, 1_u32);
        cache.insert(2, 2);
        cache.insert(3, 3);
        cache.insert(4, 4);
        cache.insert(5, 5);
        assert!(cache.peek(&1).is_none());

        // re-adding a recently evicted key goes straight to the frequent queue
        cache.insert(1, 10);
        for i in 100..110 {
            cache.insert(i, i);
        }
        assert_eq!(cache.get(&1), Some(&10));
    }

    #[test]
    fn test_two_queue_remove() {
        let mut cache = TwoQueueCache::new(4);
        cache.insert("a", 1);
        assert_eq!(cache.remove(&"a"), Some(1));
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
    }
}
