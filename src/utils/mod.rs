// Shared numeric helpers
pub mod maths_utils;

pub use maths_utils::{round_to_cents, to_pct};
