pub mod core;
pub mod quote;
pub mod strategy;

// Re-export key components
pub use self::core::PricingEngine;
pub use quote::compute_quote;
pub use strategy::PricingStrategy;
