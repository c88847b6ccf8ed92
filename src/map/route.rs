// Key to shard routing.

use std::hash::{Hash, Hasher};

use xxhash_rust::xxh3::Xxh3;

/// Hashes a key with xxh3 (seed 0).
///
/// The key is fed through its `Hash` impl, so any hashable type works.
/// The digest is deterministic for a given build; `Hash` output is not
/// guaranteed across platforms or compiler versions.
#[inline]
pub fn key_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = Xxh3::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps a key onto a shard index in `[0, shards)`.
///
/// `shards` must be non-zero; a zero count is clamped to one.
#[inline]
pub fn route<K: Hash + ?Sized>(key: &K, shards: usize) -> usize {
    debug_assert!(shards > 0, "shard count must be positive");
    (key_hash(key) % shards.max(1) as u64) as usize
}
