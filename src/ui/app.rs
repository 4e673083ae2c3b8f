use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::domain::QuoteInputs;
use crate::engine::{PricingEngine, PricingStrategy};
use crate::ui::plot_view::RatePlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The presentation shell: holds the live input values, feeds every
/// committed change to the pricing engine, and renders the result.
#[derive(Deserialize, Serialize)]
pub struct RateScopeApp {
    // UI state (persisted between sessions)
    #[serde(default)]
    pub(super) inputs: QuoteInputs,
    #[serde(default)]
    pub(super) strategy: PricingStrategy,

    // Runtime state - skip serialization
    #[serde(skip)]
    pub(super) engine: PricingEngine,
    #[serde(skip)]
    pub(super) plot_view: RatePlotView,
    #[serde(skip)]
    pub(super) show_help: bool,
}

impl Default for RateScopeApp {
    fn default() -> Self {
        Self::new_with_initial_state()
    }
}

impl RateScopeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        launch_strategy: Option<PricingStrategy>,
        fresh: bool,
    ) -> Self {
        let mut app: RateScopeApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage.filter(|_| !fresh) {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No usable persisted state found. Creating anew.");
                }
                app = RateScopeApp::new_with_initial_state();
            }
        } else {
            app = RateScopeApp::new_with_initial_state();
        }

        // CLI flag overrides whatever strategy was persisted
        if let Some(strategy) = launch_strategy {
            app.strategy = strategy;
        }

        // Reinitialize everything that is skipped during serialization
        app.engine = PricingEngine::new(app.inputs.clone(), app.strategy);
        app.plot_view = RatePlotView::new();
        app.show_help = false;

        app
    }

    pub fn new_with_initial_state() -> Self {
        let inputs = QuoteInputs::default();
        let strategy = PricingStrategy::default();
        Self {
            engine: PricingEngine::new(inputs.clone(), strategy),
            inputs,
            strategy,
            plot_view: RatePlotView::new(),
            show_help: false,
        }
    }

    /// Feed the current input values to the engine. The engine skips the
    /// recomputation when nothing actually changed, so calling this after
    /// every frame's events is cheap.
    pub(super) fn commit_inputs(&mut self) {
        self.engine.commit_inputs(self.inputs.clone());
    }

    pub(super) fn apply_strategy(&mut self, strategy: PricingStrategy) {
        self.strategy = strategy;
        if self.engine.set_strategy(strategy) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Strategy switched to {}", strategy);
            }
        }
    }

    pub(super) fn reset_inputs(&mut self) {
        self.inputs = QuoteInputs::default();
        self.commit_inputs();
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Inputs reset to defaults");
        }
    }
}

impl eframe::App for RateScopeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }
    }
}
