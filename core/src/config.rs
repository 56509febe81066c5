//! Dashboard configuration
//!
//! Re-exports the shared config types and parses them from TOML.

use thiserror::Error;

pub use emissions_types::{DEFAULT_DATA_URL, DashboardConfig, YearRange};

/// Errors while reading the dashboard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse dashboard configuration")]
    Parse(#[from] toml::de::Error),

    #[error("invalid year range {min}..={max}")]
    InvalidYearRange { min: i32, max: i32 },

    #[error("data_url must not be empty")]
    EmptyDataUrl,
}

/// Parse and validate a TOML configuration. Missing keys take their defaults.
pub fn parse_config(text: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(text)?;

    if config.year_range.min > config.year_range.max {
        return Err(ConfigError::InvalidYearRange {
            min: config.year_range.min,
            max: config.year_range.max,
        });
    }
    if config.data_url.trim().is_empty() {
        return Err(ConfigError::EmptyDataUrl);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emissions_types::Metric;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.year_range, YearRange { min: 2003, max: 2023 });
        assert_eq!(config.default_metric, Metric::Population);
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
default_metric = "GDP"

[year_range]
min = 2010
"#,
        )
        .unwrap();

        assert_eq!(config.default_metric, Metric::Gdp);
        assert_eq!(config.year_range, YearRange { min: 2010, max: 2023 });
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_rejects_inverted_year_range() {
        let err = parse_config("[year_range]\nmin = 2020\nmax = 2010\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidYearRange {
                min: 2020,
                max: 2010
            }
        ));
    }

    #[test]
    fn test_rejects_empty_url_and_bad_toml() {
        assert!(matches!(
            parse_config("data_url = \"  \""),
            Err(ConfigError::EmptyDataUrl)
        ));
        assert!(matches!(
            parse_config("default_metric = \"Rainfall\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
