mod search;

pub use search::{AlphaBetaWorker, BestMoveRecord, Iteration};
