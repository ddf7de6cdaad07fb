//! Configuration for the test runner
//!
//! Settings are loaded from an optional JSON file so CI jobs can pin quiet
//! mode, the log filter, and a default selection without changing the command
//! line. Command line flags always win over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::HarnessError;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "TESTRUNNER_CONFIG";

/// Complete runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Print one `.` per test case instead of one line
    pub quiet: bool,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Selectors to run when none are given on the command line
    pub selectors: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            log_filter: "warn".to_string(),
            selectors: Vec::new(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let config = serde_json::from_str(&contents).map_err(|err| HarnessError::ConfigParse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        log::info!("[Config] Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults
    ///
    /// Missing or malformed files are logged and ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("[Config] {}. Using defaults.", err);
                Self::default()
            }
        }
    }

    /// Resolve the config from an explicit path, then `TESTRUNNER_CONFIG`
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, HarnessError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Ok(Self::load_or_default(path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert!(!config.quiet);
        assert_eq!(config.log_filter, "warn");
        assert!(config.selectors.is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"quiet": true, "selectors": ["TestHarness"]}}"#).unwrap();

        let config = HarnessConfig::load_from_file(file.path()).unwrap();
        assert!(config.quiet);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.selectors, vec!["TestHarness".to_string()]);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ quiet: yes").unwrap();

        let err = HarnessConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, HarnessError::ConfigParse { .. }));
        assert_eq!(
            HarnessConfig::load_or_default(file.path()),
            HarnessConfig::default()
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HarnessConfig::load_from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, HarnessError::ConfigRead { .. }));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = HarnessConfig {
            quiet: true,
            log_filter: "fixture_harness=debug".to_string(),
            selectors: vec!["TestSelfCheck::instances_sorted".to_string()],
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: HarnessConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
