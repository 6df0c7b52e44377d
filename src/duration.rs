use std::{fmt, ops::Div};

use serde::Serialize;

use crate::errors::DurationError;

pub const NANOSECOND: i64 = 1;
pub const MICROSECOND: i64 = 1_000 * NANOSECOND;
pub const MILLISECOND: i64 = 1_000 * MICROSECOND;
pub const SECOND: i64 = 1_000 * MILLISECOND;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;

/// Suffix Gin uses for microsecond latencies (U+00B5 MICRO SIGN).
const MICRO_SIGN_SUFFIX: &str = "\u{b5}s";

/// Request latency with nanosecond resolution.
///
/// Serializes as the bare nanosecond count. `Display` renders the value in the
/// largest readable unit with three decimals and honours width/alignment, so
/// `format!("{:>12}", latency)` pads the rendered text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Latency(i64);

impl Latency {
    pub const ZERO: Latency = Latency(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub fn saturating_add(self, other: Latency) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Div<i64> for Latency {
    type Output = Latency;

    /// Integer division truncating toward zero.
    fn div(self, rhs: i64) -> Self::Output {
        Latency(self.0 / rhs)
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;

        // Microsecond and millisecond bands truncate to whole units first, so
        // their decimals are always ".000".
        let rendered = if d < MICROSECOND {
            format!("{:.3}ns", d as f64)
        } else if d < MILLISECOND {
            format!("{:.3}\u{b5}s", (d / MICROSECOND) as f64)
        } else if d < SECOND {
            format!("{:.3}ms", (d / MILLISECOND) as f64)
        } else {
            let seconds = (d / SECOND) as f64 + (d % SECOND) as f64 / SECOND as f64;
            format!("{:.3}s", seconds)
        };

        f.pad(&rendered)
    }
}

/// Parses a Gin latency column into a [`Latency`].
///
/// `µs` and `ms` suffixes take a floating point value which is scaled and
/// truncated toward zero. Everything else goes through [`parse_compound`].
///
/// # Example
///
/// ```rust
/// use gin_log_parser::duration::parse_duration;
///
/// assert_eq!(parse_duration("500µs").unwrap().as_nanos(), 500_000);
/// assert_eq!(parse_duration("1.5ms").unwrap().as_nanos(), 1_500_000);
/// assert_eq!(parse_duration("2s").unwrap().as_nanos(), 2_000_000_000);
/// ```
pub fn parse_duration(input: &str) -> Result<Latency, DurationError> {
    let input = input.trim();

    if let Some(value) = input.strip_suffix(MICRO_SIGN_SUFFIX) {
        return scaled_float(value, MICROSECOND, input);
    }

    if let Some(value) = input.strip_suffix("ms") {
        return scaled_float(value, MILLISECOND, input);
    }

    parse_compound(input)
}

fn scaled_float(value: &str, unit: i64, input: &str) -> Result<Latency, DurationError> {
    let value: f64 = value
        .parse()
        .map_err(|_| DurationError::invalid_number(input))?;

    // `as` saturates at the i64 bounds and maps NaN to zero.
    Ok(Latency((value * unit as f64) as i64))
}

/// Parses a signed sequence of decimal numbers, each with an optional fraction
/// and a mandatory unit suffix, such as `"300ms"`, `"-1.5h"` or `"2h45m"`.
///
/// Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. The bare
/// string `"0"` is accepted without a unit.
pub fn parse_compound(input: &str) -> Result<Latency, DurationError> {
    const LIMIT: u64 = 1 << 63;

    let mut rest = input;
    let mut negative = false;

    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Latency::ZERO);
    }
    if rest.is_empty() {
        return Err(if input.is_empty() {
            DurationError::Empty
        } else {
            DurationError::invalid_number(input)
        });
    }

    let mut total: u64 = 0;

    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(DurationError::invalid_number(input));
        }

        let (whole, has_whole, remainder) =
            leading_int(rest).ok_or_else(|| DurationError::overflow(input))?;
        rest = remainder;

        let mut fraction = 0u64;
        let mut scale = 1.0f64;
        let mut has_fraction = false;
        if let Some(remainder) = rest.strip_prefix('.') {
            let (digits, digits_scale, consumed, remainder) = leading_fraction(remainder);
            fraction = digits;
            scale = digits_scale;
            has_fraction = consumed;
            rest = remainder;
        }

        if !has_whole && !has_fraction {
            return Err(DurationError::invalid_number(input));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationError::missing_unit(input));
        }
        let (unit, remainder) = rest.split_at(unit_len);
        rest = remainder;

        let unit_nanos =
            unit_nanos(unit).ok_or_else(|| DurationError::unknown_unit(unit, input))?;

        if whole > LIMIT / unit_nanos {
            return Err(DurationError::overflow(input));
        }
        let mut value = whole * unit_nanos;

        if fraction > 0 {
            value += (fraction as f64 * (unit_nanos as f64 / scale)) as u64;
            if value > LIMIT {
                return Err(DurationError::overflow(input));
            }
        }

        total = total
            .checked_add(value)
            .filter(|total| *total <= LIMIT)
            .ok_or_else(|| DurationError::overflow(input))?;
    }

    if negative {
        // 1 << 63 maps onto i64::MIN, which is its own wrapping negation.
        return Ok(Latency((total as i64).wrapping_neg()));
    }

    i64::try_from(total)
        .map(Latency)
        .map_err(|_| DurationError::overflow(input))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND as u64),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND as u64),
        "ms" => Some(MILLISECOND as u64),
        "s" => Some(SECOND as u64),
        "m" => Some(MINUTE as u64),
        "h" => Some(HOUR as u64),
        _ => None,
    }
}

/// Consumes leading ASCII digits. Returns `None` when the value exceeds 1 << 63.
fn leading_int(s: &str) -> Option<(u64, bool, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;

    for digit in s[..end].bytes() {
        if value > (1 << 63) / 10 {
            return None;
        }
        value = value * 10 + u64::from(digit - b'0');
        if value > 1 << 63 {
            return None;
        }
    }

    Some((value, end > 0, &s[end..]))
}

/// Consumes fraction digits. Digits past the representable precision are
/// skipped rather than rejected.
fn leading_fraction(s: &str) -> (u64, f64, bool, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0f64;
    let mut saturated = false;

    for digit in s[..end].bytes() {
        if saturated {
            continue;
        }
        if value > (1 << 63) / 10 {
            saturated = true;
            continue;
        }
        let next = value * 10 + u64::from(digit - b'0');
        if next > 1 << 63 {
            saturated = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }

    (value, scale, end > 0, &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_sign_suffix() {
        assert_eq!(parse_duration("500µs").unwrap(), Latency::from_nanos(500_000));
        assert_eq!(parse_duration("0.5µs").unwrap(), Latency::from_nanos(500));
        assert_eq!(
            parse_duration("  12.345678µs ").unwrap(),
            Latency::from_nanos(12_345)
        );
    }

    #[test]
    fn test_millisecond_suffix() {
        assert_eq!(
            parse_duration("1.5ms").unwrap(),
            Latency::from_nanos(1_500_000)
        );
        assert_eq!(
            parse_duration("2.0000005ms").unwrap(),
            Latency::from_nanos(2_000_000)
        );
    }

    #[test]
    fn test_suffix_float_saturates() {
        assert_eq!(
            parse_duration("1e30ms").unwrap(),
            Latency::from_nanos(i64::MAX)
        );
        assert_eq!(
            parse_duration("-1e30µs").unwrap(),
            Latency::from_nanos(i64::MIN)
        );
        assert_eq!(parse_duration("NaNms").unwrap(), Latency::ZERO);
        assert_eq!(parse_duration("infµs").unwrap(), Latency::from_nanos(i64::MAX));
    }

    #[test]
    fn test_compound_grammar() {
        assert_eq!(
            parse_duration("2s").unwrap(),
            Latency::from_nanos(2_000_000_000)
        );
        assert_eq!(
            parse_duration("1m2.5s").unwrap(),
            Latency::from_nanos(62_500_000_000)
        );
        assert_eq!(
            parse_duration("1h30m").unwrap(),
            Latency::from_nanos(90 * MINUTE)
        );
        assert_eq!(parse_duration("150ns").unwrap(), Latency::from_nanos(150));
        assert_eq!(parse_duration("3us").unwrap(), Latency::from_nanos(3_000));
        assert_eq!(
            parse_duration("3\u{3bc}s").unwrap(),
            Latency::from_nanos(3_000)
        );
        assert_eq!(parse_duration(".5s").unwrap(), Latency::from_nanos(SECOND / 2));
        assert_eq!(parse_duration("0").unwrap(), Latency::ZERO);
        assert_eq!(parse_duration("-1.5s").unwrap(), Latency::from_nanos(-1_500_000_000));
        assert_eq!(parse_duration("+2s").unwrap(), Latency::from_nanos(2 * SECOND));
    }

    #[test]
    fn test_compound_grammar_errors() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert!(matches!(
            parse_duration("-"),
            Err(DurationError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("abc"),
            Err(DurationError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("5"),
            Err(DurationError::MissingUnit(_))
        ));
        assert!(matches!(
            parse_duration("1x"),
            Err(DurationError::UnknownUnit { .. })
        ));
        assert!(matches!(
            parse_duration("."),
            Err(DurationError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("9999999999h"),
            Err(DurationError::Overflow(_))
        ));
    }

    #[test]
    fn test_suffix_branch_does_not_fall_back() {
        // "1h5ms" ends in "ms", so the float branch owns it and rejects "1h5".
        assert!(matches!(
            parse_duration("1h5ms"),
            Err(DurationError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("fastµs"),
            Err(DurationError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_display_bands() {
        assert_eq!(Latency::from_nanos(0).to_string(), "0.000ns");
        assert_eq!(Latency::from_nanos(999).to_string(), "999.000ns");
        assert_eq!(Latency::from_nanos(500_000).to_string(), "500.000µs");
        assert_eq!(Latency::from_nanos(250_000_000).to_string(), "250.000ms");
        assert_eq!(Latency::from_nanos(1_500_000_000).to_string(), "1.500s");
        assert_eq!(Latency::from_nanos(62_500_000_000).to_string(), "62.500s");
    }

    // Fidelity choice: the micro and milli bands keep the truncate-then-".000"
    // rendering of Gin tooling instead of printing true fractional digits.
    #[test]
    fn test_display_truncates_sub_unit_precision() {
        assert_eq!(Latency::from_nanos(1_999).to_string(), "1.000µs");
        assert_eq!(Latency::from_nanos(12_345_678).to_string(), "12.000ms");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(
            format!("{:>12}", Latency::from_nanos(500_000)),
            "   500.000µs"
        );
        assert_eq!(format!("{:<8}|", Latency::from_nanos(1)), "1.000ns |");
    }

    #[test]
    fn test_integer_division() {
        assert_eq!(Latency::from_nanos(10) / 3, Latency::from_nanos(3));
        assert_eq!(Latency::from_nanos(-10) / 3, Latency::from_nanos(-3));
    }

    #[test]
    fn test_serializes_as_nanos() {
        let json = serde_json::to_string(&Latency::from_nanos(500_000)).unwrap();
        assert_eq!(json, "500000");
    }
}
