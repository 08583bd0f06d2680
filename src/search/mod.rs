mod clock;
mod valuation;

use std::time::Instant;

pub use clock::Clock;
pub use valuation::{Evaluator, Valuation, ValuationFn};

/// Counters kept by a search worker for one decision.
#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub leaves_evaluated: u64,

    start_t: Instant,
}

impl SearchStats {
    pub fn new() -> Self {
        SearchStats {
            nodes_visited: 0,
            leaves_evaluated: 0,
            start_t: Instant::now(),
        }
    }

    pub fn current_nps(&self) -> f64 {
        self.nodes_visited as f64 / self.start_t.elapsed().as_secs_f64()
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        SearchStats::new()
    }
}

#[cfg(test)]
pub(crate) mod tree;
