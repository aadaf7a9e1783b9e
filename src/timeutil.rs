//! Time helpers

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::time::Duration;

/// Format `elapsed` as milliseconds with three decimals, e.g. `"1.500ms"`.
pub fn microseconds_str(elapsed: Duration) -> String {
    format!("{:.3}ms", elapsed.as_nanos() as f64 / 1e6)
}

/// The current time in the given UTC offset.
pub fn now_in_timezone(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Parse a UTC offset written as `+08:00`, `-0530`, `UTC` or `Z`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("utc") || value.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }

    let (sign, rest) = match value.as_bytes().first() {
        Some(b'+') => (1, &value[1..]),
        Some(b'-') => (-1, &value[1..]),
        _ => return Err(Error::Config(format!("invalid UTC offset: {value}"))),
    };

    // HH:MM or HHMM
    let [h1, h2, m1, m2] = match rest.as_bytes() {
        [h1, h2, b':', m1, m2] | [h1, h2, m1, m2] => [*h1, *h2, *m1, *m2],
        _ => return Err(Error::Config(format!("invalid UTC offset: {value}"))),
    };
    if ![h1, h2, m1, m2].iter().all(u8::is_ascii_digit) {
        return Err(Error::Config(format!("invalid UTC offset: {value}")));
    }

    let hours = i32::from(h1 - b'0') * 10 + i32::from(h2 - b'0');
    let minutes = i32::from(m1 - b'0') * 10 + i32::from(m2 - b'0');
    if minutes >= 60 {
        return Err(Error::Config(format!("invalid UTC offset: {value}")));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| Error::Config(format!("UTC offset out of range: {value}")))
}
