use std::path::{Path, PathBuf};

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::cache::DatasetCache;
use crate::error::Result;
use crate::pipeline::{self, Analysis};
use crate::ui::{chart, table};
use crate::ui::table::TableSort;

pub const APP_TITLE: &str = "Voltage Data Analysis Dashboard";
const DESCRIPTION: &str = "This dashboard visualizes the voltage trends and identifies anomalies.";

/// Result of one pipeline run, as the page presents it.
#[derive(Debug)]
pub enum RunOutcome {
    Ready(Analysis),
    /// The data file is missing: only the error message is shown.
    DataNotFound(PathBuf),
    /// Any other failure aborts the run.
    Failed(String),
}

impl RunOutcome {
    pub fn from_result(result: Result<Analysis>) -> Self {
        match result {
            Ok(analysis) => RunOutcome::Ready(analysis),
            Err(crate::error::DashboardError::DataNotFound { path }) => {
                tracing::warn!("Data file {:?} not found", path);
                RunOutcome::DataNotFound(path)
            }
            Err(e) => {
                tracing::error!("Failed to analyse data: {e}");
                RunOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            RunOutcome::Ready(a) => Some(a),
            _ => None,
        }
    }
}

/// Message shown when the data file is missing.
pub fn not_found_message(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Error: {name} not found. Please upload it to the repository.")
}

/// The single-page voltage dashboard.
pub struct DashboardApp {
    pub config: DashboardConfig,
    cache: DatasetCache,
    outcome: RunOutcome,
    /// "Show Raw Data" checkbox.
    pub show_raw_data: bool,
    table_sort: TableSort,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(24.0),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.visuals.window_corner_radius = egui::CornerRadius::same(8);

        ctx.set_style(style);
        ctx.set_visuals(config.theme.visuals());

        Self::with_config(config)
    }

    /// Build the app and run the pipeline once, without an egui context.
    pub fn with_config(config: DashboardConfig) -> Self {
        let mut cache = DatasetCache::new(config.cache_enabled);
        let outcome = RunOutcome::from_result(pipeline::run(&mut cache, &config));
        Self {
            config,
            cache,
            outcome,
            show_raw_data: false,
            table_sort: None,
        }
    }

    /// Re-run the whole pipeline from the data file.
    pub fn refresh(&mut self) {
        self.outcome = RunOutcome::from_result(pipeline::run(&mut self.cache, &self.config));
    }

    /// Drop the cached dataset, then re-run. Bound to the Refresh button.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.config.data_path);
        self.refresh();
    }

    pub fn outcome(&self) -> &RunOutcome {
        &self.outcome
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(self.config.data_path.display().to_string()).monospace());
                if let Some(a) = self.outcome.analysis() {
                    ui.separator();
                    ui.label(egui::RichText::new(format!("{} rows", a.dataset.len())).weak());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("Theme: {}", self.config.theme.label())).clicked() {
                        self.config.theme = self.config.theme.toggle();
                        ctx.set_visuals(self.config.theme.visuals());
                    }
                    if ui.button("Refresh").clicked() {
                        self.reload();
                    }
                });
            });
        });
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        let theme = self.config.theme;

        ui.heading(APP_TITLE);
        ui.label(DESCRIPTION);
        ui.add_space(6.0);

        let analysis = match &self.outcome {
            RunOutcome::Ready(a) => a,
            RunOutcome::DataNotFound(path) => {
                ui.colored_label(theme.error_color(), not_found_message(path));
                return;
            }
            RunOutcome::Failed(msg) => {
                ui.colored_label(theme.error_color(), format!("Failed to analyse data: {msg}"));
                return;
            }
        };

        ui.colored_label(theme.success_color(), "Data loaded successfully!");
        ui.add_space(10.0);

        ui.heading("Voltage vs Timestamp Chart");
        let chart_height = (ui.available_height() * 0.55).max(320.0);
        chart::show_chart(ui, analysis, &theme, chart_height);
        ui.add_space(10.0);

        ui.heading("Key Statistics");
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Number of Local Peaks:").strong());
            ui.label(analysis.stats.peak_count.to_string());
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Instances below {}V:", analysis.settings.threshold)).strong());
            ui.label(analysis.stats.below_threshold.to_string());
        });
        ui.add_space(10.0);

        let was_shown = self.show_raw_data;
        ui.checkbox(&mut self.show_raw_data, "Show Raw Data");
        if self.show_raw_data != was_shown {
            // Each interaction re-runs the pipeline; the cache keeps it cheap.
            self.refresh();
            return;
        }
        if self.show_raw_data {
            table::show_table_view(ui, analysis, &mut self.table_sort);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_page(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::TempCsv;
    use crate::error::DashboardError;

    #[test]
    fn test_not_found_message_names_file() {
        assert_eq!(
            not_found_message(Path::new("data/Sample_Data.csv")),
            "Error: Sample_Data.csv not found. Please upload it to the repository."
        );
    }

    #[test]
    fn test_missing_file_halts_with_no_analysis() {
        let config = DashboardConfig {
            data_path: std::env::temp_dir().join("voltdash-app-missing.csv"),
            ..Default::default()
        };
        let app = DashboardApp::with_config(config);
        assert!(matches!(app.outcome(), RunOutcome::DataNotFound(_)));
        assert!(app.outcome().analysis().is_none());
    }

    #[test]
    fn test_other_errors_are_fatal() {
        let outcome = RunOutcome::from_result(Err(DashboardError::MissingColumn("Values")));
        match outcome {
            RunOutcome::Failed(msg) => assert_eq!(msg, "missing column `Values`"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_refresh_picks_up_file_changes() {
        let file = TempCsv::new("app-refresh", "Timestamp,Values\n01-01-2023 00:00:00,25\n");
        let config = DashboardConfig { data_path: file.path().to_path_buf(), ..Default::default() };
        let mut app = DashboardApp::with_config(config);
        assert_eq!(app.outcome().analysis().map(|a| a.stats.below_threshold), Some(0));

        file.rewrite("Timestamp,Values\n01-01-2023 00:00:00,15\n");
        app.refresh();
        assert_eq!(app.outcome().analysis().map(|a| a.stats.below_threshold), Some(1));
    }

    #[test]
    fn test_reload_reparses_unchanged_file() {
        let file = TempCsv::new("app-reload", "Timestamp,Values\n01-01-2023 00:00:00,25\n");
        let config = DashboardConfig { data_path: file.path().to_path_buf(), ..Default::default() };
        let mut app = DashboardApp::with_config(config);
        let before = app.outcome().analysis().map(|a| std::sync::Arc::clone(&a.dataset)).unwrap();

        app.refresh();
        let cached = app.outcome().analysis().map(|a| std::sync::Arc::clone(&a.dataset)).unwrap();
        assert!(std::sync::Arc::ptr_eq(&before, &cached));

        app.reload();
        let reparsed = app.outcome().analysis().map(|a| std::sync::Arc::clone(&a.dataset)).unwrap();
        assert!(!std::sync::Arc::ptr_eq(&before, &reparsed));
        assert_eq!(before, reparsed);
    }
}
