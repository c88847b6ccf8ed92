// Shard implementation: one independently locked segment of the map.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

/// Shard data protected by lock.
///
/// `count` is only ever changed together with `items`, under the same
/// write guard.
pub(crate) struct ShardData<K, V> {
    pub(crate) items: HashMap<K, V>,
    pub(crate) count: usize,
}

/// Shard is an independent segment of the sharded map.
///
/// All reads take the lock with `read_recursive`, so a read nested inside a
/// `get_with`/`walk_r` callback never waits behind a queued writer.
pub(crate) struct Shard<K, V> {
    pub(crate) data: RwLock<ShardData<K, V>>,
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq,
{
    /// Creates a new empty shard.
    pub(crate) fn new() -> Self {
        Self {
            data: RwLock::new(ShardData {
                items: HashMap::new(),
                count: 0,
            }),
        }
    }

    /// Gets a clone of the value by key.
    pub(crate) fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.data.read_recursive().items.get(key).cloned()
    }

    /// Runs `f` over the value under the read lock.
    pub(crate) fn get_with<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.data.read_recursive().items.get(key).map(f)
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.data.read_recursive().items.contains_key(key)
    }

    /// Sets or updates a key-value pair.
    /// Returns the replaced value, if any.
    pub(crate) fn set(&self, key: K, value: V) -> Option<V> {
        let mut data = self.data.write();
        let old = data.items.insert(key, value);
        if old.is_none() {
            data.count += 1;
        }
        old
    }

    /// Removes a key and returns its value on hit.
    pub(crate) fn remove(&self, key: &K) -> Option<V> {
        let mut data = self.data.write();
        let old = data.items.remove(key);
        if old.is_some() {
            data.count -= 1;
        }
        old
    }

    /// Gets the number of items.
    pub(crate) fn len(&self) -> usize {
        self.data.read_recursive().count
    }

    /// Copies all keys out of the shard.
    pub(crate) fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let data = self.data.read_recursive();
        let mut out = Vec::with_capacity(data.count);
        out.extend(data.items.keys().cloned());
        out
    }

    /// Clears all entries.
    /// Returns the number of items removed.
    pub(crate) fn clear(&self) -> usize {
        let mut data = self.data.write();
        let removed = data.count;
        data.items.clear();
        data.count = 0;
        removed
    }

    /// Walks over items with a recursive read lock.
    /// Returns false if `f` asked to stop.
    pub(crate) fn walk_r<F>(&self, f: &mut F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        let data = self.data.read_recursive();
        for (k, v) in data.items.iter() {
            if !f(k, v) {
                return false;
            }
        }
        true
    }
}
