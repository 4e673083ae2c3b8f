use crate::domain::{PricingError, QuoteInputs, RateQuote};

use super::quote::compute_quote;
use super::strategy::PricingStrategy;

/// The pricing engine: owns the committed input snapshot, the selected
/// strategy, and the quote derived from them.
///
/// Recomputation is synchronous and atomic. The stored quote always
/// corresponds to the most recently committed snapshot (last commit wins);
/// on error the quote is cleared rather than left pointing at stale inputs.
pub struct PricingEngine {
    inputs: QuoteInputs,
    strategy: PricingStrategy,
    quote: Option<RateQuote>,
    last_error: Option<PricingError>,

    /// Telemetry for the status bar
    recalc_count: u64,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(QuoteInputs::default(), PricingStrategy::default())
    }
}

impl PricingEngine {
    /// Initialize the engine and compute the first quote.
    pub fn new(inputs: QuoteInputs, strategy: PricingStrategy) -> Self {
        let mut engine = Self {
            inputs,
            strategy,
            quote: None,
            last_error: None,
            recalc_count: 0,
        };
        engine.recompute();
        engine
    }

    /// Commit a new input snapshot. Recomputes only if the snapshot
    /// actually changed; returns true when a recomputation ran.
    pub fn commit_inputs(&mut self, inputs: QuoteInputs) -> bool {
        if inputs == self.inputs {
            return false;
        }
        self.inputs = inputs;
        self.recompute();
        true
    }

    /// Switch strategy, recomputing against the current snapshot.
    pub fn set_strategy(&mut self, strategy: PricingStrategy) -> bool {
        if strategy == self.strategy {
            return false;
        }
        self.strategy = strategy;
        self.recompute();
        true
    }

    // --- ACCESSORS FOR UI ---

    pub fn quote(&self) -> Option<&RateQuote> {
        self.quote.as_ref()
    }

    pub fn last_error(&self) -> Option<&PricingError> {
        self.last_error.as_ref()
    }

    pub fn inputs(&self) -> &QuoteInputs {
        &self.inputs
    }

    pub fn strategy(&self) -> PricingStrategy {
        self.strategy
    }

    /// How many times the engine has recomputed since launch.
    pub fn recalc_count(&self) -> u64 {
        self.recalc_count
    }

    // --- INTERNAL LOGIC ---

    fn recompute(&mut self) {
        self.recalc_count += 1;

        match compute_quote(&self.inputs, self.strategy) {
            Ok(quote) => {
                #[cfg(debug_assertions)]
                if crate::config::DEBUG_FLAGS.print_recalcs {
                    log::info!(
                        "Recalc #{}: {} -> ${:.2}/hr",
                        self.recalc_count,
                        self.strategy,
                        quote.hourly_rate
                    );
                }
                self.quote = Some(quote);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Quote failed: {}", e);
                // Never display a quote for a superseded snapshot
                self.quote = None;
                self.last_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_computes_on_construction() {
        let engine = PricingEngine::new(QuoteInputs::default(), PricingStrategy::MarginReporting);
        assert!(engine.quote().is_some());
        assert!(engine.last_error().is_none());
        assert_eq!(engine.recalc_count(), 1);
    }

    #[test]
    fn test_identical_commit_skips_recompute() {
        let mut engine =
            PricingEngine::new(QuoteInputs::default(), PricingStrategy::MarginReporting);
        let before = engine.recalc_count();
        assert!(!engine.commit_inputs(QuoteInputs::default()));
        assert_eq!(engine.recalc_count(), before);
    }

    #[test]
    fn test_last_commit_wins() {
        let mut engine =
            PricingEngine::new(QuoteInputs::default(), PricingStrategy::MarginReporting);

        let first = QuoteInputs {
            competitor_price: 30.0,
            ..QuoteInputs::default()
        };
        let second = QuoteInputs {
            competitor_price: 40.0,
            ..QuoteInputs::default()
        };

        assert!(engine.commit_inputs(first));
        assert!(engine.commit_inputs(second.clone()));

        // The displayed quote corresponds to the latest snapshot only
        assert_eq!(engine.inputs(), &second);
        let direct = compute_quote(&second, PricingStrategy::MarginReporting).unwrap();
        assert_eq!(engine.quote(), Some(&direct));
    }

    #[test]
    fn test_error_clears_stale_quote() {
        let mut engine =
            PricingEngine::new(QuoteInputs::default(), PricingStrategy::MarginFlooring);
        assert!(engine.quote().is_some());

        let bad = QuoteInputs {
            min_gross_margin: 1.0,
            ..QuoteInputs::default()
        };
        assert!(engine.commit_inputs(bad));
        assert!(engine.quote().is_none(), "stale quote must not survive");
        assert!(matches!(
            engine.last_error(),
            Some(PricingError::DivisionByZero(_))
        ));

        // Recovery: a good snapshot restores the quote and clears the error
        assert!(engine.commit_inputs(QuoteInputs::default()));
        assert!(engine.quote().is_some());
        assert!(engine.last_error().is_none());
    }

    #[test]
    fn test_strategy_switch_recomputes_same_snapshot() {
        let mut engine =
            PricingEngine::new(QuoteInputs::default(), PricingStrategy::MarginReporting);
        let reporting_rate = engine.quote().unwrap().hourly_rate;

        assert!(engine.set_strategy(PricingStrategy::MarginFlooring));
        let flooring_rate = engine.quote().unwrap().hourly_rate;

        // Different unit scaling: the strategies are not drop-in equivalent
        assert_ne!(reporting_rate, flooring_rate);

        // Same strategy again is a no-op
        assert!(!engine.set_strategy(PricingStrategy::MarginFlooring));
    }
}
