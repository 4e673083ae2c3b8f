use crate::ui::config::UI_CONFIG;
use eframe::egui::{Color32, RichText, Ui};

/// Extension trait adding semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Small, gray text (captions and secondary labels).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// A "Label: Value" pair; the label subdued, the value colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// A sub-section header in the configured accent color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// An error message (red).
    fn label_error(&mut self, text: impl Into<String>);

    /// A warning/advisory message (gold).
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::from_rgb(255, 215, 0)));
    }
}
