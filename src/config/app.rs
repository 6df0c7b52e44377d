use std::path::Path;

use serde::{Deserialize, Serialize};

use config::{Config as ConfigBuilder, Environment, File, Map};

use crate::{errors::AppError, filter::Filter};

use super::{LoggingConfig, OutputConfig};

/// Main application configuration
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Record filters
    #[serde(default)]
    pub filter: Filter,

    /// Output mode selection
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Environment variable prefix
    const ENV_PREFIX: &'static str = "GIN_LOG_PARSER";

    /// Keys that may be overridden from the environment, as `<section>__<key>`
    const ENV_KEYS: [&'static str; 11] = [
        "FILTER__METHOD",
        "FILTER__CODE",
        "FILTER__DATE",
        "FILTER__URL",
        "FILTER__IP",
        "OUTPUT__RAW",
        "OUTPUT__JSON",
        "LOGGING__LEVEL",
        "LOGGING__FORMAT",
        "LOGGING__INCLUDE_LOCATION",
        "LOGGING__LOG_DIR",
    ];

    /// Build configuration using the following priority (highest to lowest):
    /// 1. Environment variables (GIN_LOG_PARSER_<SECTION>__<KEY>)
    /// 2. Configuration file passed with `--config`
    /// 3. Built-in defaults
    ///
    /// Command line flags are applied on top by the caller.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let defaults = Config::default();

        let mut builder = ConfigBuilder::builder()
            // Filter configuration
            .set_default("filter.method", defaults.filter.method)?
            .set_default("filter.code", defaults.filter.code)?
            .set_default("filter.date", defaults.filter.date)?
            .set_default("filter.url", defaults.filter.url)?
            .set_default("filter.ip", defaults.filter.ip)?
            // Output configuration
            .set_default("output.raw", defaults.output.raw)?
            .set_default("output.json", defaults.output.json)?
            // Logging configuration
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format.to_string())?
            .set_default(
                "logging.include_location",
                defaults.logging.include_location,
            )?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder.add_source(Self::environment()).build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Environment source limited to [`Self::ENV_KEYS`]. Other variables
    /// sharing the prefix are ignored, so the strict schema only applies to
    /// config files.
    fn environment() -> Environment {
        let known: Map<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter(|(key, _)| Self::is_known_env_key(key))
            .collect();

        Environment::with_prefix(Self::ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(known))
    }

    fn is_known_env_key(key: &str) -> bool {
        let Some((prefix, rest)) = key.split_at_checked(Self::ENV_PREFIX.len()) else {
            return false;
        };
        let Some(rest) = rest.strip_prefix('_') else {
            return false;
        };

        prefix.eq_ignore_ascii_case(Self::ENV_PREFIX)
            && Self::ENV_KEYS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(rest))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AppError> {
        self.logging.validate()?;
        Ok(())
    }
}
