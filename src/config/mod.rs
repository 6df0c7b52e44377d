mod app;
mod logging;
mod output;
mod types;

pub use app::Config;
pub use logging::Config as LoggingConfig;
pub use output::Config as OutputConfig;
pub use types::{LogFormat, OutputMode};
