mod log_format;
mod output_mode;

pub use log_format::*;
pub use output_mode::*;
