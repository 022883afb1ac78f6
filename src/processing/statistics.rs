use chrono::Duration;

use crate::processing::peaks;

/// Parameters for the moving average and the two key statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub window: Duration,
    pub peak_distance: usize,
    pub threshold: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            window: Duration::days(5),
            peak_distance: 20,
            threshold: 20.0,
        }
    }
}

/// Number of values strictly below `threshold`.
pub fn count_below(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v < threshold).count()
}

/// The two headline numbers shown under the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStatistics {
    pub peak_count: usize,
    pub below_threshold: usize,
}

impl KeyStatistics {
    /// Compute both statistics over the raw voltage series.
    pub fn compute(voltages: &[f64], settings: &AnalysisSettings) -> Self {
        Self {
            peak_count: peaks::count_peaks(voltages, settings.peak_distance),
            below_threshold: count_below(voltages, settings.threshold),
        }
    }

    /// Format as a multi-line report string.
    pub fn report(&self, threshold: f64) -> String {
        format!(
            "Number of Local Peaks: {}\nInstances below {}V: {}\n",
            self.peak_count, threshold, self.below_threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_below_is_strict() {
        let values = [19.99, 20.0, 20.01, 5.0, 25.0];
        assert_eq!(count_below(&values, 20.0), 2);
        assert_eq!(
            count_below(&values, 20.0),
            values.iter().filter(|v| **v < 20.0).count()
        );
    }

    #[test]
    fn test_count_below_zero_when_all_above() {
        assert_eq!(count_below(&[20.0, 21.0, 300.0], 20.0), 0);
        assert_eq!(count_below(&[], 20.0), 0);
    }

    #[test]
    fn test_compute_and_report() {
        let values = [10.0, 25.0, 5.0, 30.0, 2.0];
        let stats = KeyStatistics::compute(&values, &AnalysisSettings::default());
        assert_eq!(stats, KeyStatistics { peak_count: 0, below_threshold: 3 });
        assert_eq!(stats.report(20.0), "Number of Local Peaks: 0\nInstances below 20V: 3\n");
    }
}
