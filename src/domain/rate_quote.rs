use serde::{Deserialize, Serialize};

/// Strategy-specific breakdown figures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuoteDetail {
    /// Margin-reporting strategy: the margin the final rate would earn
    /// over the base cost, as a percentage of the rate (rounded to 2 dp).
    MarginReport { gross_margin_pct: f64 },
    /// Margin-flooring strategy: the intermediate figures that explain the
    /// floor. Exposed unrounded for transparency in the breakdown.
    MarginFloor {
        /// Lowest price clearing the target margin over base cost
        min_price: f64,
        /// max(min_price, discounted competitor price), pre-adjustment
        suggested_price: f64,
    },
}

/// The engine's output: the suggested hourly rate plus the intermediate
/// figures that explain it.
///
/// A RateQuote is fully derived from one `QuoteInputs` snapshot and the
/// fixed base cost. It has no identity or lifecycle of its own: it is
/// created fresh on every committed input change and replaced on the next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Final suggested price, rounded to 2 decimal places
    pub hourly_rate: f64,
    /// The assumed per-hour cost floor (constant 17.50)
    pub base_cost: f64,
    /// Percentage uplift attributable to unit count
    pub unit_premium_pct: f64,
    /// Percentage reduction attributable to weekly hours
    pub hours_discount_pct: f64,
    pub detail: QuoteDetail,
}

impl RateQuote {
    /// Gross margin readout, when the active strategy reports one.
    pub fn gross_margin_pct(&self) -> Option<f64> {
        match self.detail {
            QuoteDetail::MarginReport { gross_margin_pct } => Some(gross_margin_pct),
            QuoteDetail::MarginFloor { .. } => None,
        }
    }
}
