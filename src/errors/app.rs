use thiserror::Error;

use super::{ConfigValidationError, InitializationError, IoOperation};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigValidationError),

    #[error("Initialization error: {0}")]
    Init(#[from] InitializationError),

    #[error("I/O error during {operation}: {details}: {source}")]
    Io {
        operation: IoOperation,
        details: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode in json: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(operation: IoOperation, details: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            operation,
            details: details.into(),
            source,
        }
    }

    pub fn read(source: std::io::Error) -> Self {
        Self::io(IoOperation::Read, "Error reading input", source)
    }

    pub fn write(source: std::io::Error) -> Self {
        Self::io(IoOperation::Write, "Error writing output", source)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(ConfigValidationError::config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = AppError::read(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream closed",
        ));
        assert!(matches!(
            err,
            AppError::Io {
                operation: IoOperation::Read,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "I/O error during read: Error reading input: stream closed"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err = AppError::from(config::ConfigError::Message("bad value".to_string()));
        assert!(matches!(err, AppError::Config(ConfigValidationError::Config(_))));
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
