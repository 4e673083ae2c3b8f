use serde::{Deserialize, Serialize};

use crate::config::PRICING;
use crate::domain::pricing_error::PricingError;

/// The committed input snapshot for one quote computation.
///
/// This struct represents everything the pricing engine needs to produce a
/// quote. It implements PartialEq (via bit-identity on the floats) so the
/// UI can detect real changes and skip redundant recomputations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuoteInputs {
    #[serde(default = "default_competitor_price")]
    pub competitor_price: f64,
    #[serde(default = "default_num_units")]
    pub num_units: u32,
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: f64,
    #[serde(default = "default_competitor_discount")]
    pub competitor_discount: f64,
    /// Target gross margin floor. Only read by the margin-flooring
    /// strategy; carried in the snapshot so strategy switches never need
    /// to re-collect inputs.
    #[serde(default = "default_min_gross_margin")]
    pub min_gross_margin: f64,
}

fn default_competitor_price() -> f64 {
    PRICING.ranges.competitor_price.default
}

fn default_num_units() -> u32 {
    PRICING.ranges.num_units.default as u32
}

fn default_hours_per_week() -> f64 {
    PRICING.ranges.hours_per_week.default
}

fn default_competitor_discount() -> f64 {
    PRICING.ranges.competitor_discount.default
}

fn default_min_gross_margin() -> f64 {
    PRICING.ranges.min_gross_margin.default
}

impl Default for QuoteInputs {
    fn default() -> Self {
        Self {
            competitor_price: default_competitor_price(),
            num_units: default_num_units(),
            hours_per_week: default_hours_per_week(),
            competitor_discount: default_competitor_discount(),
            min_gross_margin: default_min_gross_margin(),
        }
    }
}

// Manual PartialEq implementation to handle f64 comparison
impl PartialEq for QuoteInputs {
    fn eq(&self, other: &Self) -> bool {
        self.competitor_price.to_bits() == other.competitor_price.to_bits()
            && self.num_units == other.num_units
            && self.hours_per_week.to_bits() == other.hours_per_week.to_bits()
            && self.competitor_discount.to_bits() == other.competitor_discount.to_bits()
            && self.min_gross_margin.to_bits() == other.min_gross_margin.to_bits()
    }
}

impl Eq for QuoteInputs {}

// Manual Hash implementation to handle f64 hashing
impl std::hash::Hash for QuoteInputs {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.competitor_price.to_bits().hash(state);
        self.num_units.hash(state);
        self.hours_per_week.to_bits().hash(state);
        self.competitor_discount.to_bits().hash(state);
        self.min_gross_margin.to_bits().hash(state);
    }
}

impl QuoteInputs {
    /// Validates the snapshot against the documented domain constraints.
    ///
    /// Rejections are synchronous and total: a snapshot that fails here
    /// never reaches a formula. `num_units == 0` is allowed (it simply
    /// earns no premium), and `min_gross_margin == 1.0` passes validation
    /// so the flooring formula can report it as the division-by-zero it
    /// actually is.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.competitor_price.is_finite()
            || !self.hours_per_week.is_finite()
            || !self.competitor_discount.is_finite()
            || !self.min_gross_margin.is_finite()
        {
            return Err(PricingError::InvalidInput(
                "all inputs must be finite numbers".to_string(),
            ));
        }
        if self.competitor_price <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "competitor price must be positive, got {}",
                self.competitor_price
            )));
        }
        if !(0.0..1.0).contains(&self.competitor_discount) {
            return Err(PricingError::InvalidInput(format!(
                "competitor discount must be in [0, 1), got {}",
                self.competitor_discount
            )));
        }
        if self.hours_per_week <= 0.0 || self.hours_per_week > PRICING.formula.hours_in_week {
            return Err(PricingError::InvalidInput(format!(
                "hours per week must be in (0, {}], got {}",
                PRICING.formula.hours_in_week, self.hours_per_week
            )));
        }
        if !(0.0..=1.0).contains(&self.min_gross_margin) {
            return Err(PricingError::InvalidInput(format!(
                "minimum gross margin must be in [0, 1], got {}",
                self.min_gross_margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let inputs = QuoteInputs::default();
        assert!(inputs.validate().is_ok());
        assert_eq!(inputs.num_units, 200);
        assert_eq!(inputs.hours_per_week, 168.0);
    }

    #[test]
    fn test_rejects_negative_price() {
        let inputs = QuoteInputs {
            competitor_price: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_discount_of_one_or_more() {
        let inputs = QuoteInputs {
            competitor_discount: 1.0,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = QuoteInputs {
            competitor_discount: 1.5,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_rejects_hours_outside_domain() {
        let zero_hours = QuoteInputs {
            hours_per_week: 0.0,
            ..Default::default()
        };
        assert!(zero_hours.validate().is_err());

        let over_a_week = QuoteInputs {
            hours_per_week: 169.0,
            ..Default::default()
        };
        assert!(over_a_week.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_fields() {
        let inputs = QuoteInputs {
            competitor_price: f64::NAN,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = QuoteInputs {
            hours_per_week: f64::INFINITY,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_zero_units_is_valid() {
        let inputs = QuoteInputs {
            num_units: 0,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_margin_of_exactly_one_passes_validation() {
        // The flooring formula owns this case and reports DivisionByZero
        let inputs = QuoteInputs {
            min_gross_margin: 1.0,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_equality_is_bitwise_on_floats() {
        let a = QuoteInputs::default();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.competitor_price += 0.01;
        assert_ne!(a, b);
    }
}
