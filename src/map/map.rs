// Sharded map: fixed set of independently locked shards.

use std::hash::Hash;

use rayon::prelude::*;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::Error;

use super::route::route;
use super::shard::Shard;

/// Number of shards used by `ShardedMap::default()`.
pub const DEFAULT_SHARDS: usize = 32;

/// ShardedMap is a thread-safe map that spreads its keys over a fixed
/// number of shards, each guarded by its own reader-writer lock.
///
/// Point operations (`get`, `set`, `remove`, `has`) lock exactly one shard.
/// Whole-map operations (`keys`, `count`, `clear`, `for_each`) lock every
/// shard once, one at a time, so their result is not a point-in-time
/// snapshot of the whole map.
///
/// Share it between threads with `Arc<ShardedMap<K, V>>`.
pub struct ShardedMap<K, V> {
    shards: Box<[Shard<K, V>]>,
}

impl<K, V> ShardedMap<K, V>
where
    K: Hash + Eq,
{
    /// Creates a new map with `shards` empty shards.
    pub fn new(shards: usize) -> Result<Self, Error> {
        if shards == 0 {
            error!(
                component = "dmap",
                event = "create_failed",
                shards,
                "shard count must be positive"
            );
            return Err(Error::ZeroShards);
        }

        let shards: Box<[Shard<K, V>]> = (0..shards).map(|_| Shard::new()).collect();
        debug!(
            component = "dmap",
            event = "created",
            shards = shards.len(),
            "sharded map created"
        );

        Ok(Self { shards })
    }

    /// Creates a new map from configuration.
    pub fn with_config(cfg: &Config) -> Result<Self, Error> {
        Self::new(cfg.shards())
    }

    /// Gets the fixed number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Gets the shard index the key routes to.
    pub fn shard_index(&self, key: &K) -> usize {
        route(key, self.shards.len())
    }

    fn shard(&self, key: &K) -> &Shard<K, V> {
        &self.shards[self.shard_index(key)]
    }

    /// Gets a value by key.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.shard(key).get(key)
    }

    /// Runs `f` on the value stored under `key` without cloning it.
    ///
    /// `f` runs under the shard's read lock. It may read from this map but
    /// must not write to it.
    pub fn get_with<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.shard(key).get_with(key, f)
    }

    /// Sets or updates a value.
    /// Returns the previous value for the key, if any.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        let shard = self.shard(&key);
        shard.set(key, value)
    }

    /// Removes a key. Absent keys are a no-op.
    /// Returns the removed value, if any.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.shard(key).remove(key)
    }

    /// Reports whether the key is present.
    pub fn has(&self, key: &K) -> bool {
        self.shard(key).contains(key)
    }

    /// Returns all keys from all shards, in no particular order.
    ///
    /// Shards are read in parallel, each under its own read lock into a
    /// local buffer; buffers are joined once every shard is done.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone + Send + Sync,
        V: Send + Sync,
    {
        let parts: Vec<Vec<K>> = self.shards.par_iter().map(Shard::keys).collect();

        let mut keys = Vec::with_capacity(parts.iter().map(Vec::len).sum());
        for part in parts {
            keys.extend(part);
        }
        keys
    }

    /// Returns the total number of items (sum of per-shard counts).
    pub fn count(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    /// Alias for `count`.
    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns per-shard item counts, indexed by shard.
    pub fn shard_lens(&self) -> Vec<usize> {
        self.shards.iter().map(Shard::len).collect()
    }

    /// Clears all shards one by one.
    /// Returns the number of items removed.
    pub fn clear(&self) -> usize {
        let removed: usize = self.shards.iter().map(Shard::clear).sum();
        debug!(
            component = "dmap",
            event = "cleared",
            items = removed,
            "sharded map cleared"
        );
        removed
    }

    /// Walks over every entry, shard by shard, under each shard's read lock.
    /// Stops as soon as `f` returns false.
    ///
    /// `f` may read from this map but must not write to it.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for shard in self.shards.iter() {
            if !shard.walk_r(&mut f) {
                return;
            }
        }
    }
}

impl<K, V> Default for ShardedMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self {
            shards: (0..DEFAULT_SHARDS).map(|_| Shard::new()).collect(),
        }
    }
}

impl<K, V> std::fmt::Debug for ShardedMap<K, V>
where
    K: Hash + Eq,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedMap")
            .field("shards", &self.shards.len())
            .field("count", &self.count())
            .finish()
    }
}
