//! UI state persistence configuration

/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = "app_state.json";
