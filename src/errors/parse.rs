use std::num::ParseIntError;

use thiserror::Error;

use super::{DurationError, LineFormatKind};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Format error: {kind} - {details}")]
    Format {
        kind: LineFormatKind,
        details: String,
    },

    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] time::error::Parse),

    #[error("Invalid status code: {0}")]
    StatusCode(#[from] ParseIntError),

    #[error("Invalid duration: {0}")]
    Duration(#[from] DurationError),
}

impl ParseError {
    pub fn format(kind: LineFormatKind, details: impl Into<String>) -> Self {
        Self::Format {
            kind,
            details: details.into(),
        }
    }

    pub fn kind(&self) -> Option<LineFormatKind> {
        match self {
            Self::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
