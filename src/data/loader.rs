use std::io::Read;
use std::path::Path;

use crate::data::datetime::parse_timestamp;
use crate::error::{DashboardError, Result};
use crate::state::reading::{Dataset, Reading};

/// Header of the timestamp column in the source file.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";
/// Header of the voltage column in the source file (displayed as `Voltage`).
pub const VALUES_COLUMN: &str = "Values";

/// Load a readings CSV from disk.
///
/// A missing file is reported as [`DashboardError::DataNotFound`]; every other
/// problem keeps its own error kind.
pub fn load_readings(path: &Path) -> Result<Dataset> {
    let bytes = read_file(path)?;
    parse_readings(bytes.as_slice())
}

/// Read the whole file, mapping `NotFound` to `DataNotFound`.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DashboardError::DataNotFound { path: path.to_path_buf() },
        _ => DashboardError::from(e),
    })
}

/// Parse CSV content with `Timestamp` and `Values` columns into a sorted dataset.
pub fn parse_readings<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let ts_idx = column_index(&headers, TIMESTAMP_COLUMN)?;
    let val_idx = column_index(&headers, VALUES_COLUMN)?;

    let mut readings = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based data row number, header excluded
        let row = i + 1;

        let ts_raw = record.get(ts_idx).unwrap_or_default();
        let timestamp = parse_timestamp(ts_raw).ok_or_else(|| DashboardError::InvalidTimestamp {
            row,
            value: ts_raw.to_string(),
        })?;

        let val_raw = record.get(val_idx).unwrap_or_default();
        let voltage = val_raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DashboardError::InvalidValue { row, value: val_raw.to_string() })?;

        readings.push(Reading::new(timestamp, voltage));
    }

    let dataset = Dataset::from_unsorted(readings);
    tracing::debug!("Parsed {} readings", dataset.len());
    Ok(dataset)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(DashboardError::MissingColumn(name))
}
