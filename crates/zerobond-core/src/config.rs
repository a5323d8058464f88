//! Pricer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PricerError, PricerResult};
use crate::format::{Precision, DEFAULT_SIGNIFICANT_DIGITS};
use crate::report::ReportFormat;

/// Smallest accepted number of significant digits.
pub const MIN_PRECISION: u32 = 15;

/// Largest accepted number of significant digits.
pub const MAX_PRECISION: u32 = 120;

/// Pricer configuration.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes:
///
/// ```toml
/// precision = 20
/// format = "json"
/// max_attempts = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    /// Significant digits in the text report
    pub precision: u32,

    /// Use the shortest round-trip rendering instead of `precision`
    pub shortest: bool,

    /// Report format
    pub format: ReportFormat,

    /// Lines each field may consume before a parse error is returned
    pub max_attempts: u32,

    /// Print the zeroed quote before prompting
    pub show_initial: bool,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_SIGNIFICANT_DIGITS,
            shortest: false,
            format: ReportFormat::Text,
            max_attempts: 1,
            show_initial: false,
        }
    }
}

impl PricerConfig {
    /// Parses a configuration from TOML and validates it.
    pub fn from_toml_str(content: &str) -> PricerResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PricerError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PricerResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading pricer configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks field ranges.
    pub fn validate(&self) -> PricerResult<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(PricerError::invalid_config(format!(
                "precision {} outside {MIN_PRECISION}..={MAX_PRECISION}",
                self.precision
            )));
        }
        if self.max_attempts == 0 {
            return Err(PricerError::invalid_config(
                "max_attempts must be at least 1",
            ));
        }
        Ok(())
    }

    /// Number rendering selected by this configuration.
    #[must_use]
    pub fn precision_mode(&self) -> Precision {
        if self.shortest {
            Precision::Shortest
        } else {
            Precision::Significant(self.precision)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PricerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.precision_mode(), Precision::Significant(17));
        assert_eq!(config.max_attempts, 1);
        assert!(!config.show_initial);
    }

    #[test]
    fn test_partial_toml() {
        let config = PricerConfig::from_toml_str("precision = 20\nformat = \"json\"\n").unwrap();
        assert_eq!(config.precision, 20);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.max_attempts, 1);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            PricerConfig::from_toml_str("").unwrap(),
            PricerConfig::default()
        );
    }

    #[test]
    fn test_precision_bounds() {
        for precision in [MIN_PRECISION, MAX_PRECISION] {
            let config = PricerConfig {
                precision,
                ..PricerConfig::default()
            };
            assert!(config.validate().is_ok());
        }
        for precision in [0, 14, 121] {
            let config = PricerConfig {
                precision,
                ..PricerConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("precision"));
        }
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let err = PricerConfig::from_toml_str("max_attempts = 0").unwrap_err();
        assert!(matches!(err, PricerError::InvalidConfig { .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(PricerConfig::from_toml_str("precison = 20").is_err());
    }

    #[test]
    fn test_shortest_overrides_precision() {
        let config = PricerConfig::from_toml_str("shortest = true").unwrap();
        assert_eq!(config.precision_mode(), Precision::Shortest);
    }

    #[test]
    fn test_missing_file() {
        let err = PricerConfig::from_file("/nonexistent/zerobond.toml").unwrap_err();
        assert!(matches!(err, PricerError::Io(_)));
    }
}
