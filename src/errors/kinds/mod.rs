mod line_format;

pub use line_format::LineFormatKind;
