//! The pure pricing formulas.
//!
//! Both strategies are total functions of one `QuoteInputs` snapshot and the
//! fixed base cost: no state, no I/O, no partial results. Callers get either
//! a complete `RateQuote` or a `PricingError`.

use crate::config::PRICING;
use crate::domain::{PricingError, QuoteDetail, QuoteInputs, RateQuote};
use crate::engine::strategy::PricingStrategy;
use crate::utils::maths_utils::{round_to_cents, to_pct};

/// Compute a quote with the given strategy. Validates the snapshot first;
/// any rejection aborts the computation with no partial result.
pub fn compute_quote(
    inputs: &QuoteInputs,
    strategy: PricingStrategy,
) -> Result<RateQuote, PricingError> {
    inputs.validate()?;

    match strategy {
        PricingStrategy::MarginReporting => margin_reporting_quote(inputs),
        PricingStrategy::MarginFlooring => margin_flooring_quote(inputs),
    }
}

/// Premium factor for the number of units served.
/// `scale` 5000 gives up to +10% at 500 units; 1000 gives +10% at 100 units.
fn unit_factor(num_units: u32, scale: f64) -> f64 {
    1.0 + num_units as f64 / scale
}

/// Discount factor for weekly coverage hours: up to -10% at a full
/// 168-hour week.
fn hours_factor(hours_per_week: f64) -> f64 {
    1.0 - (hours_per_week / PRICING.formula.hours_in_week) * PRICING.formula.full_time_discount
}

/// Variant 1: price off the discounted competitor rate, report the margin.
fn margin_reporting_quote(inputs: &QuoteInputs) -> Result<RateQuote, PricingError> {
    let unit_factor = unit_factor(inputs.num_units, PRICING.formula.reporting_unit_scale);
    let hours_factor = hours_factor(inputs.hours_per_week);

    let final_price = inputs.competitor_price
        * (1.0 - inputs.competitor_discount)
        * unit_factor
        * hours_factor;

    // Validation keeps every factor strictly positive, but the margin
    // division must never see a zero price regardless.
    if final_price == 0.0 {
        return Err(PricingError::DivisionByZero(
            "final price is zero, gross margin is undefined",
        ));
    }

    let gross_margin = (final_price - PRICING.base_hourly_cost) / final_price * 100.0;

    Ok(RateQuote {
        hourly_rate: round_to_cents(final_price),
        base_cost: PRICING.base_hourly_cost,
        unit_premium_pct: to_pct(unit_factor - 1.0),
        hours_discount_pct: to_pct(1.0 - hours_factor),
        detail: QuoteDetail::MarginReport {
            gross_margin_pct: round_to_cents(gross_margin),
        },
    })
}

/// Variant 2: floor the price at the minimum clearing the target margin.
///
/// The `max(...)` step encodes the floor policy: never quote below the
/// price needed to clear `min_gross_margin` over base cost, however
/// aggressive the competitor's discounted price is.
fn margin_flooring_quote(inputs: &QuoteInputs) -> Result<RateQuote, PricingError> {
    let margin_headroom = 1.0 - inputs.min_gross_margin;
    if margin_headroom == 0.0 {
        return Err(PricingError::DivisionByZero(
            "minimum gross margin of 100% admits no finite price",
        ));
    }

    let unit_factor = unit_factor(inputs.num_units, PRICING.formula.flooring_unit_scale);
    let hours_factor = hours_factor(inputs.hours_per_week);

    let min_price = PRICING.base_hourly_cost / margin_headroom;
    let discounted_competitor = inputs.competitor_price * (1.0 - inputs.competitor_discount);
    let suggested_price = min_price.max(discounted_competitor);

    let final_price = suggested_price * unit_factor * hours_factor;

    Ok(RateQuote {
        hourly_rate: round_to_cents(final_price),
        base_cost: PRICING.base_hourly_cost,
        unit_premium_pct: to_pct(unit_factor - 1.0),
        hours_discount_pct: to_pct(1.0 - hours_factor),
        detail: QuoteDetail::MarginFloor {
            min_price,
            suggested_price,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn default_inputs() -> QuoteInputs {
        QuoteInputs::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_margin_reporting_reference_scenario() {
        // competitor 25, units 200, hours 168, discount 5%
        let quote = compute_quote(&default_inputs(), PricingStrategy::MarginReporting).unwrap();

        // unit factor 1.04, hours factor 0.9
        assert_close(quote.unit_premium_pct, 4.0);
        assert_close(quote.hours_discount_pct, 10.0);

        // 25 * 0.95 * 1.04 * 0.9 = 22.23
        assert_eq!(quote.hourly_rate, 22.23);
        assert_eq!(quote.base_cost, 17.50);

        // (22.23 - 17.50) / 22.23 * 100 ~= 21.28
        assert_eq!(quote.gross_margin_pct(), Some(21.28));
    }

    #[test]
    fn test_margin_flooring_reference_scenario() {
        // Same inputs plus min margin 25%
        let quote = compute_quote(&default_inputs(), PricingStrategy::MarginFlooring).unwrap();

        let QuoteDetail::MarginFloor {
            min_price,
            suggested_price,
        } = quote.detail
        else {
            panic!("expected MarginFloor detail");
        };

        // min price 17.50 / 0.75 = 23.33..., discounted competitor 23.75
        assert_close(min_price, 17.50 / 0.75);
        assert_close(suggested_price, 23.75);

        // unit factor 1.2, hours factor 0.9 -> 23.75 * 1.2 * 0.9 = 25.65
        assert_close(quote.unit_premium_pct, 20.0);
        assert_close(quote.hours_discount_pct, 10.0);
        assert_eq!(quote.hourly_rate, 25.65);
    }

    #[test]
    fn test_floor_dominates_aggressive_competitor() {
        // Competitor so cheap the discounted price falls under the floor
        let inputs = QuoteInputs {
            competitor_price: 18.0,
            min_gross_margin: 0.25,
            ..default_inputs()
        };
        let quote = compute_quote(&inputs, PricingStrategy::MarginFlooring).unwrap();

        let QuoteDetail::MarginFloor {
            min_price,
            suggested_price,
        } = quote.detail
        else {
            panic!("expected MarginFloor detail");
        };

        // 18 * 0.95 = 17.10 < 23.33..., so the floor wins
        assert_close(suggested_price, min_price);
    }

    #[test]
    fn test_floor_property_holds_pre_rounding() {
        // finalPrice >= minPrice * unitFactor * hoursFactor for a grid of inputs
        for price in [10.0, 18.0, 25.0, 50.0] {
            for units in [0u32, 100, 500, 1000] {
                for hours in [1.0, 40.0, 168.0] {
                    for margin in [0.0, 0.25, 0.9] {
                        let inputs = QuoteInputs {
                            competitor_price: price,
                            num_units: units,
                            hours_per_week: hours,
                            competitor_discount: 0.05,
                            min_gross_margin: margin,
                        };
                        let quote =
                            compute_quote(&inputs, PricingStrategy::MarginFlooring).unwrap();
                        let QuoteDetail::MarginFloor { min_price, .. } = quote.detail else {
                            panic!("expected MarginFloor detail");
                        };
                        let uf = 1.0 + units as f64 / 1000.0;
                        let hf = 1.0 - hours / 168.0 * 0.1;
                        assert!(
                            quote.hourly_rate >= round_to_cents(min_price * uf * hf) - EPS,
                            "floor violated for price={price} units={units} \
                             hours={hours} margin={margin}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_unit_premium_monotonic_in_units() {
        for strategy in [
            PricingStrategy::MarginReporting,
            PricingStrategy::MarginFlooring,
        ] {
            let mut last_premium = -1.0;
            for units in [0u32, 1, 50, 200, 500, 1000] {
                let inputs = QuoteInputs {
                    num_units: units,
                    ..default_inputs()
                };
                let quote = compute_quote(&inputs, strategy).unwrap();
                assert!(
                    quote.unit_premium_pct >= last_premium,
                    "premium regressed at {units} units ({strategy:?})"
                );
                last_premium = quote.unit_premium_pct;
            }
        }
    }

    #[test]
    fn test_hours_discount_monotonic_in_hours() {
        let mut last_discount = -1.0;
        for hours in [1.0, 20.0, 40.0, 80.0, 120.0, 168.0] {
            let inputs = QuoteInputs {
                hours_per_week: hours,
                ..default_inputs()
            };
            let quote = compute_quote(&inputs, PricingStrategy::MarginReporting).unwrap();
            assert!(
                quote.hours_discount_pct >= last_discount,
                "discount regressed at {hours} hours"
            );
            last_discount = quote.hours_discount_pct;
        }
    }

    #[test]
    fn test_boundary_zero_units_no_premium() {
        let inputs = QuoteInputs {
            num_units: 0,
            ..default_inputs()
        };
        for strategy in [
            PricingStrategy::MarginReporting,
            PricingStrategy::MarginFlooring,
        ] {
            let quote = compute_quote(&inputs, strategy).unwrap();
            assert_close(quote.unit_premium_pct, 0.0);
        }
    }

    #[test]
    fn test_boundary_full_week_max_discount() {
        let inputs = QuoteInputs {
            hours_per_week: 168.0,
            ..default_inputs()
        };
        let quote = compute_quote(&inputs, PricingStrategy::MarginReporting).unwrap();
        assert_close(quote.hours_discount_pct, 10.0);
    }

    #[test]
    fn test_margin_of_one_is_division_by_zero() {
        let inputs = QuoteInputs {
            min_gross_margin: 1.0,
            ..default_inputs()
        };
        let result = compute_quote(&inputs, PricingStrategy::MarginFlooring);
        assert!(matches!(result, Err(PricingError::DivisionByZero(_))));
    }

    #[test]
    fn test_invalid_inputs_abort_both_strategies() {
        let inputs = QuoteInputs {
            competitor_discount: 1.0,
            ..default_inputs()
        };
        for strategy in [
            PricingStrategy::MarginReporting,
            PricingStrategy::MarginFlooring,
        ] {
            assert!(matches!(
                compute_quote(&inputs, strategy),
                Err(PricingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_quote_is_pure_and_idempotent() {
        let inputs = default_inputs();
        let a = compute_quote(&inputs, PricingStrategy::MarginReporting).unwrap();
        let b = compute_quote(&inputs, PricingStrategy::MarginReporting).unwrap();
        // Bit-identical output for identical inputs
        assert_eq!(a, b);
    }

    #[test]
    fn test_rate_is_finite_positive_and_two_dp() {
        for strategy in [
            PricingStrategy::MarginReporting,
            PricingStrategy::MarginFlooring,
        ] {
            for price in [10.0, 25.0, 50.0] {
                for units in [0u32, 333, 1000] {
                    for hours in [0.5, 84.0, 168.0] {
                        let inputs = QuoteInputs {
                            competitor_price: price,
                            num_units: units,
                            hours_per_week: hours,
                            ..default_inputs()
                        };
                        let quote = compute_quote(&inputs, strategy).unwrap();
                        assert!(quote.hourly_rate.is_finite());
                        assert!(quote.hourly_rate >= 0.0);
                        assert_eq!(quote.hourly_rate, round_to_cents(quote.hourly_rate));
                    }
                }
            }
        }
    }
}
