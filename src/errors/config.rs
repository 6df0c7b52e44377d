use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid logging configuration: {0}")]
    Logging(String),
}

impl ConfigValidationError {
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config(details.into())
    }

    pub fn logging(details: impl Into<String>) -> Self {
        Self::Logging(details.into())
    }
}
