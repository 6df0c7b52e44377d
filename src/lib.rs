pub mod config;
pub mod duration;
pub mod errors;
pub mod filter;
pub mod log_analyzer;
pub mod logging;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod record;

pub use config::Config;
pub use duration::{parse_duration, Latency};
pub use errors::{AppError, ParseError};
pub use filter::Filter;
pub use log_analyzer::LogAnalyzer;
pub use logging::setup_logging;
pub use metrics::Metrics;
pub use parser::parse_line;
pub use record::LogRecord;
