use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::cache::DatasetCache;
use crate::error::Result;
use crate::processing::moving_average::trailing_time_mean;
use crate::processing::statistics::{AnalysisSettings, KeyStatistics};
use crate::state::reading::Dataset;

/// Everything one dashboard run derives from the data file.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dataset: Arc<Dataset>,
    /// Trailing moving average, index-aligned with `dataset.readings()`.
    pub moving_average: Vec<f64>,
    pub stats: KeyStatistics,
    pub settings: AnalysisSettings,
}

impl Analysis {
    pub fn compute(dataset: Arc<Dataset>, settings: AnalysisSettings) -> Self {
        let moving_average = trailing_time_mean(dataset.readings(), settings.window);
        let stats = KeyStatistics::compute(&dataset.voltages(), &settings);
        Self { dataset, moving_average, stats, settings }
    }

    /// Chart points for the raw series: `[unix_seconds, voltage]`.
    pub fn voltage_points(&self) -> Vec<[f64; 2]> {
        self.dataset
            .readings()
            .iter()
            .map(|r| [r.unix_seconds(), r.voltage])
            .collect()
    }

    /// Chart points for the moving average.
    pub fn moving_average_points(&self) -> Vec<[f64; 2]> {
        self.dataset
            .readings()
            .iter()
            .zip(&self.moving_average)
            .map(|(r, &ma)| [r.unix_seconds(), ma])
            .collect()
    }
}

/// Load (through the cache), then derive the moving average and statistics.
pub fn run(cache: &mut DatasetCache, config: &DashboardConfig) -> Result<Analysis> {
    let settings = config.analysis_settings()?;
    let dataset = cache.get_or_load(&config.data_path)?;
    tracing::info!("Loaded {} readings from {:?}", dataset.len(), config.data_path);
    let analysis = Analysis::compute(dataset, settings);
    tracing::debug!("Key statistics:\n{}", analysis.stats.report(config.voltage_threshold));
    Ok(analysis)
}
