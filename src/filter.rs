use serde::{Deserialize, Serialize};

use crate::record::LogRecord;

/// Exact-match constraints on parsed records.
///
/// Every field is optional: an empty string, or a zero status code, places no
/// restriction. All set constraints must hold.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Filter {
    /// HTTP method, e.g. `GET`
    pub method: String,

    /// Status code, 0 disables the check
    pub code: i64,

    /// Request date as `YYYY/MM/DD`
    pub date: String,

    /// Request path
    pub url: String,

    /// Client address
    pub ip: String,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        if !self.method.is_empty() && record.method != self.method {
            return false;
        }

        if self.code != 0 && record.code != self.code {
            return false;
        }

        if !self.date.is_empty() && record.day() != self.date {
            return false;
        }

        if !self.url.is_empty() && record.url != self.url {
            return false;
        }

        if !self.ip.is_empty() && record.ip != self.ip {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::duration::Latency;

    fn record(method: &str, code: i64) -> LogRecord {
        LogRecord {
            date: datetime!(2023-01-02 15:04:05 UTC),
            code,
            duration: Latency::from_nanos(1_000),
            ip: "10.0.0.1".to_string(),
            method: method.to_string(),
            url: "/api/items".to_string(),
        }
    }

    fn sample() -> Vec<LogRecord> {
        vec![
            record("GET", 200),
            record("GET", 404),
            record("POST", 200),
            record("POST", 404),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = Filter::default();
        assert!(filter.is_empty());
        assert!(sample().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn test_method_and_code_compose() {
        let filter = Filter {
            method: "GET".to_string(),
            code: 200,
            ..Default::default()
        };
        let matched: Vec<_> = sample().into_iter().filter(|r| filter.matches(r)).collect();

        assert_eq!(matched, vec![record("GET", 200)]);
    }

    #[test]
    fn test_exact_match_only() {
        let lowercase = Filter {
            method: "get".to_string(),
            ..Default::default()
        };
        assert!(!lowercase.matches(&record("GET", 200)));

        let prefix = Filter {
            url: "/api".to_string(),
            ..Default::default()
        };
        assert!(!prefix.matches(&record("GET", 200)));
    }

    #[test]
    fn test_date_filter() {
        let same_day = Filter {
            date: "2023/01/02".to_string(),
            ..Default::default()
        };
        assert!(same_day.matches(&record("GET", 200)));

        let other_layout = Filter {
            date: "2023-01-02".to_string(),
            ..Default::default()
        };
        assert!(!other_layout.matches(&record("GET", 200)));
    }

    #[test]
    fn test_ip_filter() {
        let filter = Filter {
            ip: "10.0.0.1".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&record("GET", 200)));

        let filter = Filter {
            ip: "10.0.0.2".to_string(),
            ..Default::default()
        };
        assert!(!filter.matches(&record("GET", 200)));
    }
}
