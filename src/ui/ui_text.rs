//! All user-facing strings in one place.

pub struct UiText {
    // Side panel
    pub inputs_heading: &'static str,
    pub competitor_price_label: &'static str,
    pub competitor_price_helper: &'static str,
    pub units_label: &'static str,
    pub units_helper: &'static str,
    pub hours_label: &'static str,
    pub hours_helper: &'static str,
    pub discount_label: &'static str,
    pub discount_helper: &'static str,
    pub margin_label: &'static str,
    pub margin_helper: &'static str,
    pub margin_unused_note: &'static str,
    pub strategy_heading: &'static str,
    pub strategy_selector_label: &'static str,

    // Central panel
    pub rate_suffix: &'static str,
    pub rate_subtitle: &'static str,
    pub breakdown_heading: &'static str,
    pub label_base_cost: &'static str,
    pub label_unit_premium: &'static str,
    pub label_hours_discount: &'static str,
    pub label_gross_margin: &'static str,
    pub label_min_price: &'static str,
    pub label_suggested_price: &'static str,
    pub margin_target_note: &'static str,
    pub error_heading: &'static str,
    pub error_hint: &'static str,

    // Rate curve plot
    pub plot_curve_name: &'static str,
    pub plot_current_point: &'static str,
    pub plot_floor_name: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,

    // Status bar
    pub status_strategy_prefix: &'static str,
    pub status_recalcs_label: &'static str,

    // Help window
    pub label_help_toggle: &'static str,
    pub label_help_strategy: &'static str,
    pub label_help_reset: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    inputs_heading: "Pricing Inputs",
    competitor_price_label: "Competitor Price",
    competitor_price_helper: "What the nearest competitor charges per hour",
    units_label: "Number of Units",
    units_helper: "Residential units in the building served",
    hours_label: "Hours per Week",
    hours_helper: "Weekly service-hour commitment (168 = round the clock)",
    discount_label: "Competitor Discount",
    discount_helper: "Discount the competitor is known to offer",
    margin_label: "Minimum Gross Margin",
    margin_helper: "Never quote below the price clearing this margin",
    margin_unused_note: "(only used by the Margin Flooring strategy)",
    strategy_heading: "Strategy",
    strategy_selector_label: "Formula revision",

    rate_suffix: "/hour",
    rate_subtitle: "Suggested hourly rate based on your inputs",
    breakdown_heading: "Calculation Details",
    label_base_cost: "Base Cost:",
    label_unit_premium: "Number of Units Premium:",
    label_hours_discount: "Hours Discount:",
    label_gross_margin: "Gross Margin:",
    label_min_price: "Margin Floor Price:",
    label_suggested_price: "Pre-Adjustment Price:",
    margin_target_note: "The target gross margin is preferred to be 27% or more.",
    error_heading: "⚠ Unable to Produce a Quote",
    error_hint: "Adjust the inputs above and the quote will refresh.",

    plot_curve_name: "Suggested rate",
    plot_current_point: "Current quote",
    plot_floor_name: "Margin floor",
    plot_x_axis: "units served",
    plot_y_axis: "$/hour",

    status_strategy_prefix: "Strategy",
    status_recalcs_label: "recalcs",

    label_help_toggle: "Toggle this help panel",
    label_help_strategy: "Switch pricing strategy",
    label_help_reset: "Reset all inputs to defaults",
};
