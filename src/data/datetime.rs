use chrono::NaiveDateTime;

/// Format of the `Timestamp` column (`DD-MM-YYYY HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Parse a `Timestamp` cell. Surrounding whitespace is ignored.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

/// Format a Unix timestamp as a human-readable datetime string.
/// Shows milliseconds when the timestamp has a fractional component.
pub fn format_timestamp(ts: f64) -> String {
    use chrono::{DateTime, Utc};
    let secs = ts.floor() as i64;
    let nanos = ((ts - ts.floor()) * 1_000_000_000.0) as u32;
    match DateTime::<Utc>::from_timestamp(secs, nanos) {
        Some(dt) => {
            if nanos == 0 {
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            } else {
                dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            }
        }
        None => format!("{ts:.3}"),
    }
}

/// Short axis tick label; drops the time of day at midnight.
pub fn format_tick(ts: f64) -> String {
    use chrono::{DateTime, Timelike, Utc};
    match DateTime::<Utc>::from_timestamp(ts.round() as i64, 0) {
        Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}
