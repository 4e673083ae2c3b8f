use std::hash::{Hash, Hasher};

use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot,
                PlotPoints, Points};

use crate::config::PRICING;
use crate::domain::{QuoteDetail, QuoteInputs, RateQuote};
use crate::engine::{PricingStrategy, compute_quote};
use crate::ui::ui_text::UI_TEXT;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Sampling stride for the rate-vs-units curve.
const UNIT_STEP: u32 = 10;

/// Precomputed curve data for one (inputs, strategy) snapshot.
#[derive(Clone)]
pub struct CurveCache {
    pub inputs_hash: u64,
    /// Suggested rate sampled across the unit-count range
    pub curve: Vec<[f64; 2]>,
    /// Margin-floor lower bound, flooring strategy only
    pub floor_curve: Option<Vec<[f64; 2]>>,
    /// The operating point for the committed snapshot
    pub current: [f64; 2],
}

/// Renders the "suggested rate vs building size" sensitivity curve.
///
/// The curve is recomputed only when the committed inputs or the strategy
/// actually change; repaints in between reuse the cache.
#[derive(Default)]
pub struct RatePlotView {
    cache: Option<CurveCache>,
}

impl RatePlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn show_rate_curve(
        &mut self,
        ui: &mut egui::Ui,
        inputs: &QuoteInputs,
        strategy: PricingStrategy,
        quote: &RateQuote,
    ) {
        let cache = self.calculate_curve(inputs, strategy, quote);

        let legend = Legend::default().position(Corner::RightTop);

        Plot::new("rate_curve")
            .legend(legend)
            .height(280.0)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.plot_curve_name, PlotPoints::new(cache.curve.clone()))
                        .color(Color32::from_rgb(130, 200, 255))
                        .width(2.0),
                );

                if let Some(floor) = &cache.floor_curve {
                    plot_ui.line(
                        Line::new(UI_TEXT.plot_floor_name, PlotPoints::new(floor.clone()))
                            .color(Color32::from_rgb(255, 180, 100))
                            .style(LineStyle::Dashed { length: 6.0 }),
                    );
                }

                plot_ui.points(
                    Points::new(
                        UI_TEXT.plot_current_point,
                        PlotPoints::new(vec![cache.current]),
                    )
                    .shape(MarkerShape::Circle)
                    .radius(5.0)
                    .color(Color32::from_rgb(130, 200, 140)),
                );
            });
    }

    fn calculate_curve(
        &mut self,
        inputs: &QuoteInputs,
        strategy: PricingStrategy,
        quote: &RateQuote,
    ) -> CurveCache {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        inputs.hash(&mut hasher);
        strategy.hash(&mut hasher);
        let current_hash = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.inputs_hash == current_hash {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_plot_cache_stats {
                    log::info!("Rate curve cache hit ({:#x})", current_hash);
                }
                return cache.clone();
            }
        }

        let max_units = PRICING.ranges.num_units.max as u32;

        // Sweep the unit count while holding every other input fixed. Each
        // sample shares the committed snapshot's validity, so failures can
        // only be the flooring margin==1 case, which never reaches here
        // (the central panel shows the error instead of the plot).
        let curve: Vec<[f64; 2]> = (0..=max_units)
            .step_by(UNIT_STEP as usize)
            .filter_map(|units| {
                let sample = QuoteInputs {
                    num_units: units,
                    ..inputs.clone()
                };
                compute_quote(&sample, strategy)
                    .ok()
                    .map(|q| [units as f64, q.hourly_rate])
            })
            .collect();

        let floor_curve = match quote.detail {
            QuoteDetail::MarginFloor { min_price, .. } => {
                let hours_factor = 1.0
                    - (inputs.hours_per_week / PRICING.formula.hours_in_week)
                        * PRICING.formula.full_time_discount;
                Some(
                    (0..=max_units)
                        .step_by(UNIT_STEP as usize)
                        .map(|units| {
                            let unit_factor =
                                1.0 + units as f64 / PRICING.formula.flooring_unit_scale;
                            [units as f64, min_price * unit_factor * hours_factor]
                        })
                        .collect(),
                )
            }
            QuoteDetail::MarginReport { .. } => None,
        };

        let cache = CurveCache {
            inputs_hash: current_hash,
            curve,
            floor_curve,
            current: [inputs.num_units as f64, quote.hourly_rate],
        };

        self.cache = Some(cache.clone());
        cache
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("${:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
