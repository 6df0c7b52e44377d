use std::iter;

use time::{format_description::BorrowedFormatItem, macros::format_description, PrimitiveDateTime};

use crate::{
    duration::parse_duration,
    errors::{LineFormatKind, ParseError},
    record::LogRecord,
};

/// Literal prefix of every Gin access log line.
pub const GIN_TAG: &str = "[GIN]";

const SEGMENT_COUNT: usize = 5;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

/// Parses a single Gin access log line.
///
/// The expected layout is
/// `[GIN] 2023/01/02 - 15:04:05 | 200 | 500µs | 127.0.0.1 | GET /health`.
/// The timestamp carries no zone and is taken as UTC. The request path is
/// rebuilt from whitespace separated tokens, so runs of inner whitespace
/// collapse to a single space.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    if !line.starts_with(GIN_TAG) {
        return Err(ParseError::format(
            LineFormatKind::MissingTag,
            "line does not start with [GIN]",
        ));
    }

    let segments: Vec<&str> = line.split('|').map(str::trim).collect();
    let &[date_part, code_part, duration_part, ip_part, request_part] = segments.as_slice() else {
        return Err(ParseError::format(
            LineFormatKind::SegmentCount,
            format!(
                "expected {} segments, found {}",
                SEGMENT_COUNT,
                segments.len()
            ),
        ));
    };

    let date_tokens: Vec<&str> = date_part.split_whitespace().collect();
    let (Some(day), Some(clock)) = (date_tokens.get(1), date_tokens.get(3)) else {
        return Err(ParseError::format(
            LineFormatKind::DateLayout,
            format!("unexpected date segment {:?}", date_part),
        ));
    };
    let date = PrimitiveDateTime::parse(&format!("{} {}", day, clock), TIMESTAMP_FORMAT)?
        .assume_utc();

    let code = code_part.parse::<i64>()?;
    let duration = parse_duration(duration_part)?;

    let mut request = request_part.split_whitespace();
    let (Some(method), Some(path_head)) = (request.next(), request.next()) else {
        return Err(ParseError::format(
            LineFormatKind::MethodPath,
            format!("unexpected request segment {:?}", request_part),
        ));
    };
    let url = iter::once(path_head)
        .chain(request)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(LogRecord {
        date,
        code,
        duration,
        ip: ip_part.to_string(),
        method: method.to_string(),
        url,
    })
}
