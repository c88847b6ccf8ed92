use super::{Config, Logs, MapBox};

/// Creates a new test configuration.
pub fn new_test_config() -> Config {
    Config {
        dmap: MapBox {
            shards: Some(10),
            logs: Some(Logs {
                level: Some("debug".to_string()),
            }),
        },
    }
}
