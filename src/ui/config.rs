use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub rate_headline: Color32,
    pub margin_healthy: Color32,
    pub margin_thin: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(235, 210, 120),
        subsection_heading: Color32::from_rgb(215, 160, 80),
        central_panel: Color32::from_rgb(28, 30, 38),
        side_panel: Color32::from_rgb(22, 22, 26),
        rate_headline: Color32::from_rgb(130, 200, 255),
        margin_healthy: Color32::from_rgb(130, 200, 140),
        margin_thin: Color32::from_rgb(255, 140, 120),
    },
};
