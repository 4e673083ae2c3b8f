//! Pricing model configuration

/// Assumed per-hour cost floor (staffing + overhead), in dollars.
pub const BASE_HOURLY_COST: f64 = 17.50;

/// Advisory only: the business prefers a gross margin of 27% or more.
/// The reporting strategy colors the margin readout against this line.
pub const TARGET_GROSS_MARGIN_PCT: f64 = 27.0;

/// Configuration for a single UI input slider
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Slider ranges and defaults for every engine input
pub struct InputRanges {
    pub competitor_price: InputRange,
    pub num_units: InputRange,
    pub hours_per_week: InputRange,
    pub competitor_discount: InputRange,
    pub min_gross_margin: InputRange,
}

/// Settings for the rate formulas themselves
pub struct FormulaSettings {
    // Unit-count denominator for the margin-reporting strategy
    // (units / 5000 means up to +10% premium at 500 units)
    pub reporting_unit_scale: f64,
    // Unit-count denominator for the margin-flooring strategy
    pub flooring_unit_scale: f64,
    // Hours in a full week of coverage (24 * 7)
    pub hours_in_week: f64,
    // Maximum fractional discount granted at full-time coverage
    pub full_time_discount: f64,
}

/// The Master Pricing Configuration
pub struct PricingConfig {
    pub base_hourly_cost: f64,
    pub formula: FormulaSettings,
    pub ranges: InputRanges,
}

pub const PRICING: PricingConfig = PricingConfig {
    base_hourly_cost: BASE_HOURLY_COST,

    formula: FormulaSettings {
        reporting_unit_scale: 5000.0,
        flooring_unit_scale: 1000.0,
        hours_in_week: 168.0,
        full_time_discount: 0.1,
    },

    ranges: InputRanges {
        competitor_price: InputRange {
            min: 10.0,
            max: 50.0,
            default: 25.0,
        },
        num_units: InputRange {
            min: 0.0,
            max: 1000.0,
            default: 200.0,
        },
        hours_per_week: InputRange {
            min: 1.0,
            max: 168.0,
            default: 168.0,
        },
        competitor_discount: InputRange {
            min: 0.0,
            max: 0.2,
            default: 0.05,
        },
        min_gross_margin: InputRange {
            min: 0.0,
            max: 0.9,
            default: 0.25,
        },
    },
};
