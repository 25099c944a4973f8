use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{LabError, LabResult};

/// Name of the defaults file picked up from the working directory
pub const LOCAL_CONFIG: &str = ".searchlab.yaml";

/// Settings for a generated comparison run.
///
/// Values can come from a `.searchlab.yaml` in the working directory;
/// command-line flags take precedence over file values, file values
/// over the built-in defaults. Example:
///
/// ```yaml
/// # Number of elements to generate
/// size: 10000
///
/// # Seed for reproducible runs (omit for a random one)
/// seed: 42
///
/// # Values are drawn from 0..size * span_factor
/// span_factor: 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Number of elements to generate
    #[serde(default = "default_size")]
    pub size: usize,

    /// Seed for the generator; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Scales the value range distinct elements are drawn from
    #[serde(default = "default_span_factor")]
    pub span_factor: i64,
}

fn default_size() -> usize {
    10_000
}

fn default_span_factor() -> i64 {
    10
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: None,
            span_factor: default_span_factor(),
        }
    }
}

impl CompareConfig {
    /// Creates a configuration for the given array size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Builder method to set the generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the value-range scale
    pub fn with_span_factor(mut self, span_factor: i64) -> Self {
        self.span_factor = span_factor;
        self
    }

    /// Loads settings from a YAML file
    pub fn load_from(path: &Path) -> LabResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| LabError::config_error(e.to_string()))
    }

    /// Loads `.searchlab.yaml` from the working directory when present,
    /// the built-in defaults otherwise.
    pub fn load() -> LabResult<Self> {
        let local = Path::new(LOCAL_CONFIG);
        if local.exists() {
            Self::load_from(local)
        } else {
            Ok(Self::default())
        }
    }

    /// Rejects settings the generator cannot satisfy: it needs at least
    /// one element and at least `size` distinct candidate values.
    pub fn validate(&self) -> LabResult<()> {
        if self.size == 0 {
            return Err(LabError::config_error("size must be at least 1"));
        }
        if self.span_factor < 1 {
            return Err(LabError::config_error("span_factor must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompareConfig::default();
        assert_eq!(config.size, 10_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.span_factor, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = CompareConfig::new(500).with_seed(42).with_span_factor(3);
        assert_eq!(config.size, 500);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.span_factor, 3);
    }

    #[test]
    fn test_yaml_with_missing_fields_takes_defaults() {
        let config: CompareConfig = serde_yaml::from_str("size: 250").unwrap();
        assert_eq!(config.size, 250);
        assert_eq!(config.seed, None);
        assert_eq!(config.span_factor, 10);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CompareConfig::new(1_000).with_seed(7);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: CompareConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let config = CompareConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(LabError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_small_span_factor() {
        let config = CompareConfig::new(100).with_span_factor(0);
        assert!(config.validate().is_err());
    }
}
