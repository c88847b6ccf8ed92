// Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::map::DEFAULT_SHARDS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "dmap")]
    pub dmap: MapBox,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MapBox {
    pub shards: Option<usize>,
    pub logs: Option<Logs>,
}

/// Logging settings for the embedding application.
///
/// The map itself only emits `tracing` events; installing a subscriber at
/// this level is left to the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

impl Config {
    /// Creates a config with the given shard count.
    pub fn with_shards(shards: usize) -> Self {
        Self {
            dmap: MapBox {
                shards: Some(shards),
                logs: None,
            },
        }
    }

    /// Gets the configured shard count, or the default one.
    pub fn shards(&self) -> usize {
        self.dmap.shards.unwrap_or(DEFAULT_SHARDS)
    }

    pub fn logs(&self) -> Option<&Logs> {
        self.dmap.logs.as_ref()
    }

    /// Gets the configured log level, "info" when unset.
    /// Meant for building the embedding application's `EnvFilter`.
    pub fn log_level(&self) -> &str {
        self.logs()
            .and_then(|logs| logs.level.as_deref())
            .unwrap_or("info")
    }

    /// Parses and validates configuration from a YAML string.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(data).context("unmarshal yaml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Resolve absolute path
        let abs_path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve absolute config filepath: {:?}", path))?;

        let data = std::fs::read_to_string(&abs_path)
            .with_context(|| format!("read config yaml file {:?}", abs_path))?;

        let cfg = Self::from_yaml(&data).with_context(|| format!("load config from {:?}", abs_path))?;

        info!(
            component = "config",
            event = "load_success",
            path = ?abs_path,
            shards = cfg.shards(),
            "config loaded"
        );

        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.dmap.shards == Some(0) {
            anyhow::bail!("dmap.shards must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_config;
#[cfg(test)]
pub use test_config::new_test_config;

#[cfg(test)]
mod config_test;
