//! Configuration schema definitions

use crate::error::{ErrorCode, Result};
use crate::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

/// Smallest accepted `suggest.limit`
pub const MIN_LIMIT: usize = 1;
/// Largest accepted `suggest.limit`
pub const MAX_LIMIT: usize = 100;
/// Queries shorter than this never produce suggestions
pub const MIN_QUERY_CHARS: usize = 2;
/// Largest accepted `suggest.min_query_chars`
pub const MAX_QUERY_CHARS: usize = 32;

/// Log levels accepted in `telemetry.log_level`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    /// Suggestion ranking options
    pub suggest: SuggestConfig,

    #[serde(default)]
    /// Logging options
    pub telemetry: TelemetryConfig,
}

impl ConfigSchema {
    /// Validate every table, collecting all problems
    pub fn validation(&self) -> ValidationResult {
        let mut result = self.suggest.validation();
        result.merge(self.telemetry.validation());
        result
    }

    /// Validate every table
    pub fn validate(&self) -> Result<()> {
        self.validation()
            .to_result_with(ErrorCode::ConfigValidationError)
    }
}

/// Options for the food suggestion ranker
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned per query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Minimum trimmed query length before suggestions appear
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_query_chars: default_min_query_chars(),
        }
    }
}

impl SuggestConfig {
    /// Range checks for this table
    pub fn validation(&self) -> ValidationResult {
        Validator::new()
            .range("suggest.limit", self.limit, MIN_LIMIT, MAX_LIMIT)
            .range(
                "suggest.min_query_chars",
                self.min_query_chars,
                MIN_QUERY_CHARS,
                MAX_QUERY_CHARS,
            )
            .validate()
    }

    /// Validate, reporting failures as invalid config values
    pub fn validate(&self) -> Result<()> {
        self.validation()
            .to_result_with(ErrorCode::InvalidConfigValue)
    }
}

fn default_limit() -> usize {
    5
}

fn default_min_query_chars() -> usize {
    MIN_QUERY_CHARS
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Include the event target in log lines
    #[serde(default)]
    pub show_target: bool,

    /// Include source file in log lines
    #[serde(default)]
    pub show_file: bool,

    /// Include line numbers in log lines
    #[serde(default)]
    pub show_line_number: bool,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            show_target: false,
            show_file: false,
            show_line_number: false,
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Checks for this table
    pub fn validation(&self) -> ValidationResult {
        Validator::new()
            .one_of("telemetry.log_level", &self.log_level, LOG_LEVELS)
            .validate()
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.suggest.limit, 5);
        assert_eq!(schema.suggest.min_query_chars, 2);
        assert_eq!(schema.telemetry.log_level, "warn");
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let schema: ConfigSchema = toml::from_str("[suggest]\nlimit = 8\n").unwrap();
        assert_eq!(schema.suggest.limit, 8);
        assert_eq!(schema.suggest.min_query_chars, 2);
        assert_eq!(schema.telemetry, TelemetryConfig::default());
    }

    #[test]
    fn test_suggest_out_of_range() {
        let config = SuggestConfig {
            limit: 0,
            min_query_chars: 1,
        };
        let result = config.validation();
        assert_eq!(result.errors().len(), 2);

        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_unknown_log_level() {
        let schema: ConfigSchema = toml::from_str("[telemetry]\nlog_level = \"chatty\"\n").unwrap();
        let err = schema.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("telemetry.log_level"));
    }
}
