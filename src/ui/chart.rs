use eframe::egui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, PlotPoints};

use crate::data::datetime;
use crate::pipeline::Analysis;
use crate::state::theme::Theme;

pub const CHART_TITLE: &str = "Voltage vs Timestamp";
pub const VOLTAGE_LABEL: &str = "Voltage";

/// Legend label for the moving-average trace, e.g. "5-Day Moving Average".
pub fn moving_average_label(analysis: &Analysis) -> String {
    format!("{}-Day Moving Average", analysis.settings.window.num_days())
}

/// Raw voltage and moving average over a shared datetime x axis.
pub fn show_chart(ui: &mut egui::Ui, analysis: &Analysis, theme: &Theme, height: f32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(CHART_TITLE).strong());
    });

    let voltage = Line::new(PlotPoints::from(analysis.voltage_points()))
        .name(VOLTAGE_LABEL)
        .color(theme.voltage_color())
        .width(1.0);
    let average = Line::new(PlotPoints::from(analysis.moving_average_points()))
        .name(moving_average_label(analysis))
        .color(theme.moving_average_color())
        .width(2.0);

    Plot::new("voltage_chart")
        .height(height)
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label("Timestamp")
        .y_axis_label(VOLTAGE_LABEL)
        .x_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            datetime::format_tick(mark.value)
        })
        .label_formatter(|name: &str, value: &PlotPoint| {
            let when = datetime::format_timestamp(value.x);
            if name.is_empty() {
                format!("{when}\n{:.3}", value.y)
            } else {
                format!("{name}\n{when}\n{:.3}", value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(voltage);
            plot_ui.line(average);
        });
}
