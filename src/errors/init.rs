use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Logging initialization error: {0}")]
    Logging(String),

    #[error("Cannot open log file in {dir}: {details}")]
    LogFile { dir: String, details: String },
}

impl InitializationError {
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    pub fn log_file(dir: impl Into<String>, details: impl Into<String>) -> Self {
        Self::LogFile {
            dir: dir.into(),
            details: details.into(),
        }
    }
}
