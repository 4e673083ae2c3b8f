//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them mostly `false` so normal
//! runs stay quiet. Everything reading these is further gated by
//! `cfg(debug_assertions)` in the call sites.

pub struct DebugFlags {
    /// Emit UI interaction logs (slider commits, strategy switches, resets).
    pub print_ui_interactions: bool,
    /// Emit a log line for every engine recomputation with the fresh quote.
    pub print_recalcs: bool,
    /// Emit plot cache hit/miss diagnostics while rendering the rate curve.
    pub print_plot_cache_stats: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_recalcs: false,
    print_plot_cache_stats: false,
    print_state_serde: false,
    print_shutdown: false,
};
