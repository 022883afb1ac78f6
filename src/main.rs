mod app;
mod config;
mod data;
mod error;
mod pipeline;
mod processing;
mod state;
mod ui;

use std::path::Path;

use app::{DashboardApp, APP_TITLE};
use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use eframe::egui_wgpu;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {CONFIG_FILE}: {e}");
        DashboardConfig::default()
    });
    tracing::info!("Reading voltage data from {:?}", config.data_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            ..Default::default()
        },
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
