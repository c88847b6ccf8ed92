// Error types for map construction.

/// Errors returned when building a `ShardedMap`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("shard count must be positive")]
    ZeroShards,
}
