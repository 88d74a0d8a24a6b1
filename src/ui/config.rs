use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub display_frame: Color32,
    pub result_text: Color32,
    pub error_text: Color32,
    pub star_colors: [Color32; 3],
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub star_count: usize,
    pub display_max_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 215, 0), // Gold, sets every heading
        central_panel: Color32::BLACK,
        side_panel: Color32::from_rgb(12, 12, 12),
        display_frame: Color32::from_rgb(51, 51, 51),
        result_text: Color32::WHITE,
        error_text: Color32::from_rgb(255, 100, 100),
        // Pale yellow, light gray, gold
        star_colors: [
            Color32::from_rgb(255, 255, 204),
            Color32::from_rgb(224, 224, 224),
            Color32::from_rgb(255, 215, 0),
        ],
    },
    star_count: 200,
    display_max_width: 520.0,
};
