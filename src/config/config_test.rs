//! Tests for configuration parsing and validation.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{new_test_config, Config};
    use crate::map::DEFAULT_SHARDS;

    #[test]
    fn test_from_yaml_reads_shards_and_level() {
        let cfg = Config::from_yaml("dmap:\n  shards: 16\n  logs:\n    level: warn\n").unwrap();
        assert_eq!(cfg.shards(), 16);
        assert_eq!(cfg.log_level(), "warn");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("dmap: {}\n").unwrap();
        assert_eq!(cfg.shards(), DEFAULT_SHARDS);
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn test_zero_shards_rejected() {
        let err = Config::from_yaml("dmap:\n  shards: 0\n").unwrap_err();
        assert!(err.to_string().contains("shards"), "unexpected error: {err}");
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(Config::from_yaml("dmap: [1, 2").is_err());
    }

    #[test]
    fn test_load_bundled_config() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("cfg/dmap.cfg.yaml");
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.shards(), 32);
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn test_load_missing_file_fails_with_path() {
        let err = Config::load("cfg/does-not-exist.yaml").unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist"));
    }

    #[test]
    fn test_test_config() {
        let cfg = new_test_config();
        assert_eq!(cfg.shards(), 10);
        assert_eq!(cfg.log_level(), "debug");
        assert_eq!(Config::with_shards(3).shards(), 3);
    }
}
