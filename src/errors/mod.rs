mod app;
mod config;
mod duration;
mod init;
mod io_operation;
mod kinds;
mod parse;

pub use kinds::LineFormatKind;

pub use app::AppError;
pub use config::ConfigValidationError;
pub use duration::DurationError;
pub use init::InitializationError;
pub use io_operation::IoOperation;
pub use parse::ParseError;
