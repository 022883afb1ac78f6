use chrono::NaiveDateTime;

/// One timestamped voltage observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub voltage: f64,
}

impl Reading {
    pub fn new(timestamp: NaiveDateTime, voltage: f64) -> Self {
        Self { timestamp, voltage }
    }

    /// Timestamp as Unix seconds, the x coordinate used by the chart.
    pub fn unix_seconds(&self) -> f64 {
        self.timestamp.and_utc().timestamp_millis() as f64 / 1000.0
    }
}

/// Readings sorted non-decreasing by timestamp.
///
/// Readings that share a timestamp keep the order they had in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    /// Build a dataset from readings in file order. Sorting is stable.
    pub fn from_unsorted(mut readings: Vec<Reading>) -> Self {
        readings.sort_by_key(|r| r.timestamp);
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn voltages(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.voltage).collect()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
