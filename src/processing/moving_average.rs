use chrono::Duration;

use crate::state::reading::Reading;

/// Trailing time-windowed mean of the voltage series.
///
/// `out[i]` is the mean voltage of rows `j <= i` whose timestamp lies in
/// `(ts[i] - window, ts[i]]`. Readings must be sorted by timestamp. Near the
/// start of the series the window is simply truncated.
///
/// The window start is found with a forward-only pointer; each window is then
/// summed directly, so the cost is O(n·w) for `w` rows per window.
pub fn trailing_time_mean(readings: &[Reading], window: Duration) -> Vec<f64> {
    let mut out = Vec::with_capacity(readings.len());
    let mut start = 0usize;

    for (i, current) in readings.iter().enumerate() {
        // None: the window reaches past the calendar's start and keeps every row
        let cutoff = current.timestamp.checked_sub_signed(window);
        while start < i && cutoff.is_some_and(|c| readings[start].timestamp <= c) {
            start += 1;
        }

        // No running total: subtraction error would accumulate across the series.
        let window_rows = &readings[start..=i];
        let sum: f64 = window_rows.iter().map(|r| r.voltage).sum();
        out.push(sum / window_rows.len() as f64);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn readings(rows: &[(u32, u32, f64)]) -> Vec<Reading> {
        rows.iter().map(|&(d, h, v)| Reading::new(at(d, h), v)).collect()
    }

    #[test]
    fn test_empty() {
        assert!(trailing_time_mean(&[], Duration::days(5)).is_empty());
    }

    #[test]
    fn test_first_row_is_own_value() {
        let rs = readings(&[(1, 0, 42.0), (1, 1, 0.0)]);
        let ma = trailing_time_mean(&rs, Duration::days(5));
        assert_eq!(ma[0], 42.0);
        assert_eq!(ma[1], 21.0);
    }

    #[test]
    fn test_window_excludes_exact_lower_bound() {
        // day 6 00:00 is exactly five days after day 1 00:00, so day 1 drops out
        let rs = readings(&[(1, 0, 10.0), (3, 0, 20.0), (6, 0, 30.0), (6, 1, 40.0)]);
        let ma = trailing_time_mean(&rs, Duration::days(5));
        assert_eq!(ma, vec![10.0, 15.0, 25.0, 30.0]);
    }

    #[test]
    fn test_uneven_spacing_uses_calendar_time() {
        let rs = readings(&[(1, 0, 1.0), (1, 12, 2.0), (2, 0, 3.0), (20, 0, 100.0)]);
        let ma = trailing_time_mean(&rs, Duration::days(5));
        assert_eq!(ma[2], 2.0);
        assert_eq!(ma[3], 100.0);
    }

    #[test]
    fn test_window_wider_than_calendar_keeps_every_row() {
        let rs = readings(&[(1, 0, 10.0), (2, 0, 20.0), (3, 0, 60.0)]);
        let ma = trailing_time_mean(&rs, Duration::try_days(1_000_000_000).unwrap());
        assert_eq!(ma, vec![10.0, 15.0, 30.0]);
    }

    #[test]
    fn test_duplicate_timestamps_are_trailing_by_row() {
        let rs = readings(&[(2, 0, 4.0), (2, 0, 8.0)]);
        let ma = trailing_time_mean(&rs, Duration::days(5));
        assert_eq!(ma, vec![4.0, 6.0]);
    }

    #[test]
    fn test_mean_within_window_bounds() {
        let values = [21.3, 19.7, 25.1, 18.2, 30.0, 22.9, 17.4, 24.6, 26.8, 20.0, 19.9, 23.3];
        let rs: Vec<Reading> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Reading::new(at(1, 0) + Duration::hours(17 * i as i64), v))
            .collect();
        let window = Duration::days(5);
        let ma = trailing_time_mean(&rs, window);

        for (i, r) in rs.iter().enumerate() {
            let in_window: Vec<f64> = rs[..=i]
                .iter()
                .filter(|o| o.timestamp > r.timestamp - window)
                .map(|o| o.voltage)
                .collect();
            let lo = in_window.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = in_window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(ma[i] >= lo && ma[i] <= hi, "row {i}: {} not in [{lo}, {hi}]", ma[i]);
        }
    }
}
