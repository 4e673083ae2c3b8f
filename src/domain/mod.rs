// Domain types and value objects
pub mod pricing_error;
pub mod quote_inputs;
pub mod rate_quote;

// Re-export commonly used types
pub use pricing_error::PricingError;
pub use quote_inputs::QuoteInputs;
pub use rate_quote::{QuoteDetail, RateQuote};
