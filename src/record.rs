use serde::Serialize;
use time::OffsetDateTime;

use crate::duration::Latency;

/// One parsed access log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub code: i64,
    pub duration: Latency,
    pub ip: String,
    pub method: String,
    pub url: String,
}

impl LogRecord {
    /// Calendar date in `YYYY/MM/DD` form.
    pub fn day(&self) -> String {
        format!(
            "{:04}/{:02}/{:02}",
            self.date.year(),
            u8::from(self.date.month()),
            self.date.day()
        )
    }

    /// Timestamp in Gin's own `YYYY/MM/DD - HH:MM:SS` layout.
    pub fn timestamp(&self) -> String {
        format!(
            "{} - {:02}:{:02}:{:02}",
            self.day(),
            self.date.hour(),
            self.date.minute(),
            self.date.second()
        )
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn record() -> LogRecord {
        LogRecord {
            date: datetime!(2023-01-02 15:04:05 UTC),
            code: 200,
            duration: Latency::from_nanos(500_000),
            ip: "127.0.0.1".to_string(),
            method: "GET".to_string(),
            url: "/health".to_string(),
        }
    }

    #[test]
    fn test_day() {
        assert_eq!(record().day(), "2023/01/02");
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(record().timestamp(), "2023/01/02 - 15:04:05");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&record()).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2023-01-02T15:04:05Z","code":200,"duration":500000,"ip":"127.0.0.1","method":"GET","url":"/health"}"#
        );
    }
}
