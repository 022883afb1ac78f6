use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Raw voltage trace: matplotlib's default blue at 60% opacity.
    pub fn voltage_color(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(0x1f, 0x77, 0xb4, 153)
    }

    pub fn moving_average_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(255, 60, 60),
            Theme::Light => Color32::from_rgb(220, 0, 0),
        }
    }

    pub fn error_color(&self) -> Color32 {
        Color32::from_rgb(255, 80, 80)
    }

    pub fn success_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(90, 200, 110),
            Theme::Light => Color32::from_rgb(20, 130, 50),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
