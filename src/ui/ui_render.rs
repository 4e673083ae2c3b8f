use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui, Window,
};

use crate::config::TARGET_GROSS_MARGIN_PCT;
use crate::domain::QuoteDetail;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{InputEventChanged, InputsPanel, Panel, StrategyPanel};
use crate::ui::utils::{format_pct, format_rate};

use super::app::RateScopeApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl RateScopeApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(240.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("inputs_panel")
                    .show(ui, |ui| {
                        let strategy_events = self.strategy_panel(ui);
                        let input_events = self.inputs_panel(ui);

                        for strategy in strategy_events {
                            self.apply_strategy(strategy);
                        }

                        let any_input_changed = !input_events.is_empty();
                        for event in input_events {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!("Input changed: {:?}", event);
                            }
                            match event {
                                InputEventChanged::CompetitorPrice(price) => {
                                    self.inputs.competitor_price = price;
                                }
                                InputEventChanged::NumUnits(units) => {
                                    self.inputs.num_units = units;
                                }
                                InputEventChanged::HoursPerWeek(hours) => {
                                    self.inputs.hours_per_week = hours;
                                }
                                InputEventChanged::CompetitorDiscount(discount) => {
                                    self.inputs.competitor_discount = discount;
                                }
                                InputEventChanged::MinGrossMargin(margin) => {
                                    self.inputs.min_gross_margin = margin;
                                }
                            }
                        }

                        // One synchronous recompute per committed change set:
                        // the displayed quote always matches the latest inputs
                        if any_input_changed {
                            self.commit_inputs();
                        }
                    });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(16.0);

                if let Some(quote) = self.engine.quote().copied() {
                    ui.vertical_centered(|ui| {
                        ui.heading(
                            RichText::new(format!(
                                "{}{}",
                                format_rate(quote.hourly_rate),
                                UI_TEXT.rate_suffix
                            ))
                            .size(44.0)
                            .color(UI_CONFIG.colors.rate_headline),
                        );
                        ui.add_space(4.0);
                        ui.label_subdued(UI_TEXT.rate_subtitle);
                    });

                    ui.add_space(16.0);
                    Self::render_breakdown(ui, &quote);

                    ui.add_space(16.0);
                    self.plot_view.show_rate_curve(
                        ui,
                        self.engine.inputs(),
                        self.engine.strategy(),
                        &quote,
                    );
                } else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading(UI_TEXT.error_heading);
                        ui.add_space(10.0);
                        if let Some(error) = self.engine.last_error() {
                            ui.label_error(error.to_string());
                        }
                        ui.add_space(20.0);
                        ui.label(UI_TEXT.error_hint);
                    });
                }
            });
    }

    fn render_breakdown(ui: &mut Ui, quote: &crate::domain::RateQuote) {
        ui.label_subheader(UI_TEXT.breakdown_heading);
        ui.add_space(5.0);

        Grid::new("breakdown_grid")
            .num_columns(2)
            .spacing([40.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(UI_TEXT.label_base_cost);
                ui.label(format_rate(quote.base_cost));
                ui.end_row();

                ui.label(UI_TEXT.label_unit_premium);
                ui.label(format_pct(quote.unit_premium_pct));
                ui.end_row();

                ui.label(UI_TEXT.label_hours_discount);
                ui.label(format_pct(quote.hours_discount_pct));
                ui.end_row();

                match quote.detail {
                    QuoteDetail::MarginReport { gross_margin_pct } => {
                        ui.label(UI_TEXT.label_gross_margin);
                        let color = if gross_margin_pct >= TARGET_GROSS_MARGIN_PCT {
                            UI_CONFIG.colors.margin_healthy
                        } else {
                            UI_CONFIG.colors.margin_thin
                        };
                        ui.label(RichText::new(format_pct(gross_margin_pct)).color(color));
                        ui.end_row();
                    }
                    QuoteDetail::MarginFloor {
                        min_price,
                        suggested_price,
                    } => {
                        ui.label(UI_TEXT.label_min_price);
                        ui.label(format_rate(min_price));
                        ui.end_row();

                        ui.label(UI_TEXT.label_suggested_price);
                        ui.label(format_rate(suggested_price));
                        ui.end_row();
                    }
                }
            });

        if let QuoteDetail::MarginReport { gross_margin_pct } = quote.detail {
            if gross_margin_pct < TARGET_GROSS_MARGIN_PCT {
                ui.add_space(6.0);
                ui.label_warning(UI_TEXT.margin_target_note);
            }
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Active strategy
                    ui.metric(
                        UI_TEXT.status_strategy_prefix,
                        &self.engine.strategy().to_string(),
                        Color32::from_rgb(150, 200, 255),
                    );
                    ui.separator();

                    // 2. Base cost floor
                    ui.metric(
                        "Base cost",
                        &format_rate(self.engine.quote().map_or(
                            crate::config::BASE_HOURLY_COST,
                            |q| q.base_cost,
                        )),
                        Color32::from_rgb(180, 200, 255),
                    );
                    ui.separator();

                    // 3. Margin health (reporting strategy only)
                    if let Some(margin) = self.engine.quote().and_then(|q| q.gross_margin_pct()) {
                        let (icon, color) = if margin >= TARGET_GROSS_MARGIN_PCT {
                            ("🟢", UI_CONFIG.colors.margin_healthy)
                        } else {
                            ("🔴", UI_CONFIG.colors.margin_thin)
                        };
                        ui.metric(
                            &format!("{} Margin", icon),
                            &format_pct(margin),
                            color,
                        );
                        ui.separator();
                    }

                    // 4. Error state
                    if let Some(error) = self.engine.last_error() {
                        ui.label_error(format!("⚠ {}", error));
                        ui.separator();
                    }

                    // 5. Engine telemetry
                    ui.label_subdued(format!(
                        "{} {}",
                        self.engine.recalc_count(),
                        UI_TEXT.status_recalcs_label
                    ));
                });
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new("⌨️ Keyboard Shortcuts")
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label("Press any key to execute the command:");
                ui.add_space(5.0);

                let shortcuts = [
                    ("H", UI_TEXT.label_help_toggle),
                    ("S", UI_TEXT.label_help_strategy),
                    ("R", UI_TEXT.label_help_reset),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });

                ui.add_space(10.0);
            });
    }

    fn inputs_panel(&mut self, ui: &mut Ui) -> Vec<InputEventChanged> {
        let mut panel = InputsPanel::new(
            self.inputs.clone(),
            self.engine.strategy().uses_min_margin(),
        );
        panel.render(ui)
    }

    fn strategy_panel(&mut self, ui: &mut Ui) -> Vec<crate::engine::PricingStrategy> {
        let mut panel = StrategyPanel::new(self.strategy);
        panel.render(ui)
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let mut toggle_help = false;
        let mut close_help = false;
        let mut cycle_strategy = false;
        let mut reset = false;

        ctx.input(|i| {
            if i.key_pressed(Key::H) {
                toggle_help = true;
            }
            if i.key_pressed(Key::Escape) {
                close_help = true;
            }
            if i.key_pressed(Key::S) {
                cycle_strategy = true;
            }
            if i.key_pressed(Key::R) {
                reset = true;
            }
        });

        if toggle_help {
            self.show_help = !self.show_help;
        }
        if close_help && self.show_help {
            self.show_help = false;
        }
        if cycle_strategy {
            let mut strategy = self.strategy;
            strategy.cycle();
            self.apply_strategy(strategy);
        }
        if reset {
            self.reset_inputs();
        }
    }
}
