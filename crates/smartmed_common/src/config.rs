//! SmartMed configuration
//!
//! Configuration lives in $XDG_CONFIG_HOME/smartmed/config.toml.
//! Every field has a default, so a missing or partial file is fine.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "smartmed";
const CONFIG_FILE: &str = "config.toml";

/// Reference data settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the reference CSV tables
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Matcher and severity settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum fractional symptom overlap (exclusive, valid: 0.0-1.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Maximum diseases reported (valid: 1-10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Weight at or above which a symptom counts as primary
    #[serde(default = "default_primary_severity")]
    pub primary_severity: u32,
}

fn default_threshold() -> f64 {
    0.3
}

fn default_max_results() -> usize {
    3
}

fn default_primary_severity() -> u32 {
    5
}

impl MatchingConfig {
    /// Clamp threshold to 0.0-1.0
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            return default_threshold();
        }
        self.threshold.clamp(0.0, 1.0)
    }

    /// Clamp max_results to 1-10
    pub fn effective_max_results(&self) -> usize {
        self.max_results.clamp(1, 10)
    }

    pub fn threshold_was_clamped(&self) -> bool {
        self.threshold != self.effective_threshold()
    }

    pub fn max_results_was_clamped(&self) -> bool {
        self.max_results != self.effective_max_results()
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max_results: default_max_results(),
            primary_severity: default_primary_severity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

/// Complete SmartMed configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmartMedConfig {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl SmartMedConfig {
    /// Load config from the user config directory; defaults when there is no file
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

}

/// Get the config file path
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = SmartMedConfig::default();
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.matching.threshold, 0.3);
        assert_eq!(config.matching.max_results, 3);
        assert_eq!(config.matching.primary_severity, 5);
        assert_eq!(config.log.level, "warn");
        assert!(config.output.color);
    }

    #[test]
    fn test_matching_clamping() {
        let mut settings = MatchingConfig {
            threshold: 1.5,
            max_results: 0,
            ..Default::default()
        };
        assert_eq!(settings.effective_threshold(), 1.0);
        assert!(settings.threshold_was_clamped());
        assert_eq!(settings.effective_max_results(), 1);
        assert!(settings.max_results_was_clamped());

        settings.threshold = -0.2;
        assert_eq!(settings.effective_threshold(), 0.0);

        settings.max_results = 50;
        assert_eq!(settings.effective_max_results(), 10);

        settings.threshold = 0.3;
        settings.max_results = 3;
        assert!(!settings.threshold_was_clamped());
        assert!(!settings.max_results_was_clamped());
    }

    #[test]
    fn test_partial_toml() {
        let config: SmartMedConfig = toml::from_str(
            r#"
[matching]
threshold = 0.5
"#,
        )
        .unwrap();
        assert_eq!(config.matching.threshold, 0.5);
        assert_eq!(config.matching.max_results, 3);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[data]\ndir = \"/srv/smartmed\"\n\n[output]\ncolor = false\n").unwrap();

        let loaded = SmartMedConfig::load_from(&path).unwrap();
        assert_eq!(loaded.data.dir, PathBuf::from("/srv/smartmed"));
        assert!(!loaded.output.color);
        assert_eq!(loaded.matching.threshold, 0.3);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[matching\nthreshold = ").unwrap();
        assert!(matches!(SmartMedConfig::load_from(&path), Err(Error::Config(_))));
    }
}
