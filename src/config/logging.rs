use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::errors::ConfigValidationError;

use super::LogFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Minimum log level, written to stderr
    pub level: String,

    /// Log format (pretty, compact or json)
    pub format: LogFormat,

    /// Whether to include source code location in logs
    pub include_location: bool,

    /// Directory for an additional log file, disabled when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
            log_dir: None,
        }
    }
}

impl Config {
    const LEVELS: [&'static str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !Self::LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigValidationError::logging(format!(
                "Invalid log level: {}",
                self.level
            )));
        }

        if let Some(dir) = &self.log_dir {
            if dir.trim().is_empty() {
                return Err(ConfigValidationError::logging(
                    "log_dir must not be empty when set",
                ));
            }
        }

        Ok(())
    }

    pub fn get_level_filter(&self) -> LevelFilter {
        match self.level.to_lowercase().as_str() {
            "off" => LevelFilter::OFF,
            "error" => LevelFilter::ERROR,
            "warn" => LevelFilter::WARN,
            "info" => LevelFilter::INFO,
            "debug" => LevelFilter::DEBUG,
            "trace" => LevelFilter::TRACE,
            _ => LevelFilter::WARN, // Fallback to the default level
        }
    }
}
