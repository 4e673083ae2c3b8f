#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

pub use domain::{PricingError, QuoteDetail, QuoteInputs, RateQuote};
pub use engine::{PricingEngine, PricingStrategy, compute_quote};
pub use ui::RateScopeApp;

use clap::Parser;

/// Interactive hourly-rate calculator for doorman service quotes.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Pricing strategy to launch with (overrides the persisted choice)
    #[arg(long, value_enum)]
    pub strategy: Option<PricingStrategy>,

    /// Ignore persisted state and start from the default inputs
    #[arg(long)]
    pub fresh: bool,
}

/// Builds the app for eframe, applying the CLI launch options.
pub fn run_app(cc: &eframe::CreationContext<'_>, cli: Cli) -> Box<dyn eframe::App> {
    Box::new(RateScopeApp::new(cc, cli.strategy, cli.fresh))
}
