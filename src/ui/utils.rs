use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured label color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats an hourly rate with fixed 2-decimal precision ($22.23).
/// The quote contract is "rounded to the cent", so the display never
/// shows more or fewer digits than the engine produced.
pub fn format_rate(rate: f64) -> String {
    format!("${:.2}", rate)
}

/// Formats a percentage readout with fixed 2-decimal precision (4.00%).
pub fn format_pct(pct: f64) -> String {
    format!("{:.2}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate_is_fixed_two_dp() {
        assert_eq!(format_rate(22.23), "$22.23");
        assert_eq!(format_rate(22.2), "$22.20");
        assert_eq!(format_rate(0.0), "$0.00");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(21.28), "21.28%");
        assert_eq!(format_pct(10.0), "10.00%");
    }
}
