//! Thread-safe key-value map partitioned over a fixed number of
//! independently locked shards.
//!
//! ```
//! use dmap::ShardedMap;
//!
//! let m: ShardedMap<String, i32> = ShardedMap::new(10).unwrap();
//! m.set("a".to_string(), 1);
//! assert_eq!(m.get(&"a".to_string()), Some(1));
//! assert_eq!(m.count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod map;
#[cfg(test)]
mod tests;

#[cfg(test)]
pub use tests::support;

pub use config::Config;
pub use error::Error;
pub use map::{route, ShardedMap, DEFAULT_SHARDS};
