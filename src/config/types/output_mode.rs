use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Request count, latency figures and status distribution
    #[default]
    Summary,
    /// One fixed-column line per matched record
    Raw,
    /// Matched records as a JSON array
    Json,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Summary => write!(f, "summary"),
            OutputMode::Raw => write!(f, "raw"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}
