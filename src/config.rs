use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::processing::statistics::AnalysisSettings;
use crate::state::theme::Theme;

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "voltdash.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV with `Timestamp` and `Values` columns.
    pub data_path: PathBuf,
    /// Length of the trailing moving-average window, in days.
    pub window_days: i64,
    /// Minimum row distance between counted peaks.
    pub peak_distance: usize,
    /// Readings strictly below this voltage are counted.
    pub voltage_threshold: f64,
    pub cache_enabled: bool,
    pub theme: Theme,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Sample_Data.csv"),
            window_days: 5,
            peak_distance: 20,
            voltage_threshold: 20.0,
            cache_enabled: true,
            theme: Theme::default(),
        }
    }
}

impl DashboardConfig {
    /// Read the config from `path`, or return the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let config: Self = serde_json::from_str(&json)?;
                config.analysis_settings()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Fails when `window_days` is not a positive, representable number of days.
    pub fn analysis_settings(&self) -> Result<AnalysisSettings> {
        let window = chrono::Duration::try_days(self.window_days)
            .filter(|w| *w > chrono::Duration::zero())
            .ok_or_else(|| {
                DashboardError::InvalidConfig(format!("window_days out of range: {}", self.window_days))
            })?;
        Ok(AnalysisSettings {
            window,
            peak_distance: self.peak_distance,
            threshold: self.voltage_threshold,
        })
    }
}
