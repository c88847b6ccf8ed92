//! Sharded map: a fixed set of independently locked shards with
//! deterministic key routing.

pub mod map;
pub mod route;
pub(crate) mod shard;


// Re-export main types
pub use map::{ShardedMap, DEFAULT_SHARDS};
pub use route::{key_hash, route};
