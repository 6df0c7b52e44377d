use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

use tracing::{debug, info};

use crate::{
    config::{Config, OutputMode},
    errors::AppError,
    metrics::Metrics,
    output,
    parser::parse_line,
    record::LogRecord,
};

/// Reads Gin log lines, keeps the records passing the configured filter and
/// renders them in the configured output mode.
///
/// Matched records are buffered in memory before anything is written, so the
/// input is expected to fit in memory.
pub struct LogAnalyzer {
    config: Config,
}

impl LogAnalyzer {
    pub fn new(config: Config) -> Result<Self, AppError> {
        // Validate the config first
        config.validate()?;

        Ok(Self { config })
    }

    /// Parses and filters every line of `reader`.
    ///
    /// Lines that do not parse are skipped. A read error aborts collection.
    pub fn collect<R: BufRead>(&self, reader: R) -> Result<Vec<LogRecord>, AppError> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(AppError::read)?;
            let line = decode_line(&line);

            let record = match parse_line(&line) {
                Ok(record) => record,
                Err(e) => {
                    debug!(line = index + 1, "Skipping line: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            if self.config.filter.matches(&record) {
                records.push(record);
            }
        }

        info!(
            matched = records.len(),
            skipped, "Finished reading input"
        );

        Ok(records)
    }

    /// Writes `records` in the configured output mode.
    pub fn render<W: Write>(&self, records: &[LogRecord], out: &mut W) -> Result<(), AppError> {
        let mode = self.config.output.mode();
        debug!("Rendering {} records as {}", records.len(), mode);

        match mode {
            OutputMode::Json => output::write_json(records, out)?,
            OutputMode::Raw => output::write_raw(records, out).map_err(AppError::write)?,
            OutputMode::Summary => {
                output::write_summary(Metrics::from_records(records), out)
                    .map_err(AppError::write)?
            }
        }

        out.flush().map_err(AppError::write)
    }

    pub fn run<R: BufRead, W: Write>(&self, reader: R, out: &mut W) -> Result<(), AppError> {
        let records = self.collect(reader)?;
        self.render(&records, out)
    }
}

/// Drops a trailing carriage return and replaces invalid UTF-8.
fn decode_line(line: &[u8]) -> Cow<'_, str> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}
