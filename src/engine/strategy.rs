use std::fmt;

use serde::{Deserialize, Serialize};

/// The two formula revisions of the pricing model.
///
/// They are not drop-in equivalent (different unit-premium scaling and
/// different floor logic), so they are selectable rather than merged.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    clap::ValueEnum,
)]
pub enum PricingStrategy {
    /// Price off the discounted competitor rate and report the resulting
    /// gross margin for the operator to judge.
    #[default]
    MarginReporting,
    /// Never quote below the price needed to clear the minimum gross
    /// margin over base cost, regardless of the competitor's discount.
    MarginFlooring,
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PricingStrategy::MarginReporting => write!(f, "Margin Reporting (competitor-led)"),
            PricingStrategy::MarginFlooring => write!(f, "Margin Flooring (never below target)"),
        }
    }
}

impl PricingStrategy {
    /// Cycle to the other strategy (keyboard shortcut helper).
    pub fn cycle(&mut self) {
        *self = match self {
            PricingStrategy::MarginReporting => PricingStrategy::MarginFlooring,
            PricingStrategy::MarginFlooring => PricingStrategy::MarginReporting,
        };
    }

    /// Whether the minimum-gross-margin input participates in this strategy.
    pub fn uses_min_margin(&self) -> bool {
        matches!(self, PricingStrategy::MarginFlooring)
    }
}
