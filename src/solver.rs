//! Common solve contract for tour strategies.

use crate::ga::{EvolutionEngine, GaResult, GenerationObserver};

/// A search strategy that produces a best tour and its cost history.
///
/// Strategies are compared against the same scenario by running each one
/// through this trait; dynamic fields are reset at the start of every
/// solve.
pub trait TourSolver {
    /// Short human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Runs the strategy to completion.
    fn solve(&mut self, observer: &mut dyn GenerationObserver) -> GaResult;
}

impl TourSolver for EvolutionEngine {
    fn name(&self) -> &'static str {
        "standard-ga"
    }

    fn solve(&mut self, observer: &mut dyn GenerationObserver) -> GaResult {
        self.run_with_observer(observer)
    }
}
