use std::io::{self, Write};

use crate::{errors::AppError, metrics::Metrics, record::LogRecord};

/// Writes all records as a single-line JSON array.
pub fn write_json<W: Write>(records: &[LogRecord], out: &mut W) -> Result<(), AppError> {
    let encoded = serde_json::to_string(records)?;
    writeln!(out, "{}", encoded).map_err(AppError::write)
}

/// Writes one fixed-column line per record.
pub fn write_raw<W: Write>(records: &[LogRecord], out: &mut W) -> io::Result<()> {
    for record in records {
        writeln!(
            out,
            "{} | {:>3} | {:>12} | {:>15} | {:<7} {}",
            record.timestamp(),
            record.code,
            record.duration,
            record.ip.trim(),
            record.method.trim(),
            record.url.trim(),
        )?;
    }
    Ok(())
}

/// Writes the request count and, when there is anything to summarize,
/// latency figures followed by the status code distribution.
pub fn write_summary<W: Write>(metrics: Metrics, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total Requests: {}", metrics.count)?;

    let Some(average) = metrics.average_time() else {
        return Ok(());
    };

    writeln!(out, "Total Time: {}", metrics.total_time)?;
    writeln!(out, "Average Time: {}", average)?;
    writeln!(out, "Min Time: {}", metrics.min_time)?;
    writeln!(out, "Max Time: {}", metrics.max_time)?;
    writeln!(out, "\nStatus Code Distribution:")?;

    for (code, count) in metrics.status_counts {
        writeln!(out, "  {}: {}", code, count)?;
    }

    Ok(())
}
