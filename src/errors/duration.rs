use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationError {
    #[error("Empty duration")]
    Empty,

    #[error("Invalid number in duration {0:?}")]
    InvalidNumber(String),

    #[error("Missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("Unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("Duration {0:?} out of range")]
    Overflow(String),
}

impl DurationError {
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber(input.into())
    }

    pub fn missing_unit(input: impl Into<String>) -> Self {
        Self::MissingUnit(input.into())
    }

    pub fn unknown_unit(unit: impl Into<String>, input: impl Into<String>) -> Self {
        Self::UnknownUnit {
            unit: unit.into(),
            input: input.into(),
        }
    }

    pub fn overflow(input: impl Into<String>) -> Self {
        Self::Overflow(input.into())
    }
}
