//! Configuration module for the rate-scope application.

pub mod pricing;

mod debug; // Private; files must use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use persistence::APP_STATE_PATH;
pub use pricing::{BASE_HOURLY_COST, PRICING, TARGET_GROSS_MARGIN_PCT};
