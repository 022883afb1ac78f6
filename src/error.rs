use std::path::PathBuf;

use thiserror::Error;

/// Every failure the dashboard pipeline can produce.
///
/// Only [`DashboardError::DataNotFound`] is handled by the shell; everything
/// else aborts the run and is shown as a fatal error.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{} not found", path.display())]
    DataNotFound { path: PathBuf },

    #[error("missing column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid timestamp `{value}` (expected DD-MM-YYYY HH:MM:SS)")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: invalid voltage `{value}`")]
    InvalidValue { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DashboardError {
    pub fn is_data_not_found(&self) -> bool {
        matches!(self, DashboardError::DataNotFound { .. })
    }
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
