use std::fmt;

/// Error types for pricing engine operations.
///
/// Every engine call is atomic: an error means no quote was produced at
/// all, never a partial or non-finite one.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input field is non-finite or violates a documented domain
    /// constraint (non-positive price, discount >= 1, hours outside
    /// (0, 168], margin outside [0, 1]).
    InvalidInput(String),
    /// A formula denominator collapsed to zero. Arises when the final
    /// price is 0 (margin-reporting) or the minimum-margin target is
    /// exactly 1 (margin-flooring). Surfaced explicitly instead of
    /// letting Infinity/NaN flow into the result.
    DivisionByZero(&'static str),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DivisionByZero(what) => write!(f, "Division by zero: {}", what),
        }
    }
}

impl std::error::Error for PricingError {}
