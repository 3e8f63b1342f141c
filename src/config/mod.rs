//! User configuration, read from `<config_dir>/contactform/config.json`.
//!
//! Every key is optional; missing keys take their default value and a missing
//! file yields [`Config::default`].

mod error;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

use crate::transport::SimulatedTransport;

const FILE_NAME: &str = "config.json";

/// Settings for the form and its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options offered by the category selector, in order.
    pub categories: Vec<String>,
    /// Delay before the simulated submission resolves.
    pub submit_delay_ms: u64,
    /// Make the simulated submission reject instead of resolving.
    pub simulate_failure: bool,
    /// Minimum level written to the log file (`off`, `error` … `trace`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: vec!["Personal".into(), "Business".into()],
            submit_delay_ms: 1000,
            simulate_failure: false,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Loads the config from the platform config directory.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("contactform").join(FILE_NAME))
    }

    /// Loads the config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.categories.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(ConfigError::DuplicateCategory(dup.clone()));
        }
        Ok(())
    }

    /// Builds the simulated transport described by this config.
    pub fn transport(&self) -> SimulatedTransport {
        let delay = Duration::from_millis(self.submit_delay_ms);
        if self.simulate_failure {
            SimulatedTransport::failing(delay)
        } else {
            SimulatedTransport::new(delay)
        }
    }

    /// Parses `log_level`, defaulting to `Info` when unrecognised.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn write_config(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join(FILE_NAME);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.categories, vec!["Personal", "Business"]);
        assert_eq!(config.submit_delay_ms, 1000);
        assert!(!config.simulate_failure);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"submit_delay_ms": 250}"#);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.categories, Config::default().categories);
    }

    #[test]
    fn full_file_overrides_everything() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"{
                "categories": ["Support", "Sales", "Other"],
                "submit_delay_ms": 10,
                "simulate_failure": true,
                "log_level": "debug"
            }"#,
        );
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.categories, vec!["Support", "Sales", "Other"]);
        assert!(config.simulate_failure);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn empty_categories_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"categories": []}"#);
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NoCategories));
    }

    #[test]
    fn duplicate_categories_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"categories": ["A", "B", "A"]}"#);
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCategory(ref c) if c == "A"));
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "{not json");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains(FILE_NAME));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn transport_follows_settings() {
        let config = Config {
            submit_delay_ms: 42,
            simulate_failure: true,
            ..Config::default()
        };
        assert_eq!(
            config.transport(),
            SimulatedTransport::failing(Duration::from_millis(42))
        );
        assert_eq!(
            Config::default().transport(),
            SimulatedTransport::new(Duration::from_millis(1000))
        );
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("contactform/config.json"));
        }
    }
}
