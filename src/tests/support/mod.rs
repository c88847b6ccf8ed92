//! Shared test helpers.

use std::sync::Once;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::new_test_config;
use crate::map::ShardedMap;

pub const KEY_PREFIXES: [&str; 5] = ["key", "otherkey", "oldkey", "keynew", "fookey"];

static LOGGER: Once = Once::new();

/// Installs a test subscriber once per process.
/// `RUST_LOG` overrides the test config level.
pub fn init_test_logger() {
    LOGGER.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let cfg = new_test_config();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(cfg.log_level()));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Builds `n` distinct keys with random prefixes, reproducible from `seed`.
pub fn make_keys(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| format!("{}_{}", KEY_PREFIXES[rng.gen_range(0..KEY_PREFIXES.len())], i))
        .collect()
}

/// Fills a fresh test map with `n` keys all mapped to `val`.
pub fn prepare_map<V: Clone>(n: usize, val: V) -> (ShardedMap<String, V>, Vec<String>) {
    let m = ShardedMap::with_config(&new_test_config()).expect("test config has shards");
    let keys = make_keys(n, 42);
    for key in &keys {
        m.set(key.clone(), val.clone());
    }
    (m, keys)
}
