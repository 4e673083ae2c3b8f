use eframe::egui::{Color32, ComboBox, RichText, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::PRICING;
use crate::domain::QuoteInputs;
use crate::engine::PricingStrategy;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum InputEventChanged {
    CompetitorPrice(f64),
    NumUnits(u32),
    HoursPerWeek(f64),
    CompetitorDiscount(f64),
    MinGrossMargin(f64),
}

/// Panel with the five pricing input sliders
pub struct InputsPanel {
    inputs: QuoteInputs,
    /// Whether the active strategy reads the minimum-margin input
    margin_active: bool,
}

impl InputsPanel {
    pub fn new(inputs: QuoteInputs, margin_active: bool) -> Self {
        Self {
            inputs,
            margin_active,
        }
    }

    fn helper_label(ui: &mut Ui, text: impl Into<String>) {
        ui.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn render_competitor_price(&mut self, ui: &mut Ui) -> Option<f64> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.competitor_price_label));

        let range = &PRICING.ranges.competitor_price;
        let response = ui.add(
            Slider::new(&mut self.inputs.competitor_price, range.min..=range.max)
                .step_by(0.5)
                .prefix("$"),
        );
        Self::helper_label(ui, UI_TEXT.competitor_price_helper);

        response.changed().then_some(self.inputs.competitor_price)
    }

    fn render_num_units(&mut self, ui: &mut Ui) -> Option<u32> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.units_label));

        let range = &PRICING.ranges.num_units;
        let mut units = self.inputs.num_units as f64;
        let response = ui.add(
            Slider::new(&mut units, range.min..=range.max)
                .integer()
                .suffix(" units"),
        );
        self.inputs.num_units = units.round() as u32;
        Self::helper_label(ui, UI_TEXT.units_helper);

        response.changed().then_some(self.inputs.num_units)
    }

    fn render_hours_per_week(&mut self, ui: &mut Ui) -> Option<f64> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.hours_label));

        let range = &PRICING.ranges.hours_per_week;
        let response = ui.add(
            Slider::new(&mut self.inputs.hours_per_week, range.min..=range.max)
                .step_by(1.0)
                .suffix(" h"),
        );
        Self::helper_label(ui, UI_TEXT.hours_helper);

        response.changed().then_some(self.inputs.hours_per_week)
    }

    fn render_competitor_discount(&mut self, ui: &mut Ui) -> Option<f64> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.discount_label));

        let range = &PRICING.ranges.competitor_discount;
        // Sliders work in whole percent; the engine takes a fraction
        let mut discount_pct = self.inputs.competitor_discount * 100.0;
        let response = ui.add(
            Slider::new(&mut discount_pct, range.min * 100.0..=range.max * 100.0)
                .step_by(1.0)
                .suffix("%"),
        );
        Self::helper_label(ui, UI_TEXT.discount_helper);

        if response.changed() {
            self.inputs.competitor_discount = discount_pct / 100.0;
            Some(self.inputs.competitor_discount)
        } else {
            None
        }
    }

    fn render_min_gross_margin(&mut self, ui: &mut Ui) -> Option<f64> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.margin_label));

        let range = &PRICING.ranges.min_gross_margin;
        let mut margin_pct = self.inputs.min_gross_margin * 100.0;
        let response = ui.add_enabled(
            self.margin_active,
            Slider::new(&mut margin_pct, range.min * 100.0..=range.max * 100.0)
                .step_by(1.0)
                .suffix("%"),
        );
        if self.margin_active {
            Self::helper_label(ui, UI_TEXT.margin_helper);
        } else {
            Self::helper_label(ui, UI_TEXT.margin_unused_note);
        }

        if response.changed() {
            self.inputs.min_gross_margin = margin_pct / 100.0;
            Some(self.inputs.min_gross_margin)
        } else {
            None
        }
    }
}

impl Panel for InputsPanel {
    type Event = InputEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.inputs_heading);

        if let Some(price) = self.render_competitor_price(ui) {
            events.push(InputEventChanged::CompetitorPrice(price));
        }
        if let Some(units) = self.render_num_units(ui) {
            events.push(InputEventChanged::NumUnits(units));
        }
        if let Some(hours) = self.render_hours_per_week(ui) {
            events.push(InputEventChanged::HoursPerWeek(hours));
        }
        if let Some(discount) = self.render_competitor_discount(ui) {
            events.push(InputEventChanged::CompetitorDiscount(discount));
        }
        spaced_separator(ui);
        if let Some(margin) = self.render_min_gross_margin(ui) {
            events.push(InputEventChanged::MinGrossMargin(margin));
        }

        ui.add_space(10.0);
        events
    }
}

/// Panel for choosing the pricing strategy
pub struct StrategyPanel {
    selected_strategy: PricingStrategy,
}

impl StrategyPanel {
    pub fn new(strategy: PricingStrategy) -> Self {
        Self {
            selected_strategy: strategy,
        }
    }
}

impl Panel for StrategyPanel {
    type Event = PricingStrategy;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.strategy_heading);

        ui.label(colored_subsection_heading(UI_TEXT.strategy_selector_label));
        ComboBox::from_id_salt("Pricing Strategy")
            .selected_text(self.selected_strategy.to_string())
            .width(220.0)
            .show_ui(ui, |ui| {
                for strategy_variant in PricingStrategy::iter() {
                    if ui
                        .selectable_value(
                            &mut self.selected_strategy,
                            strategy_variant,
                            strategy_variant.to_string(),
                        )
                        .clicked()
                    {
                        events.push(self.selected_strategy);
                    }
                }
            });

        ui.add_space(10.0);
        events
    }
}
