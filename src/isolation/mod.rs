mod board;
pub mod valuation;

pub use board::{Board, MAX_SIDE};
pub use valuation::EvaluatorKind;
