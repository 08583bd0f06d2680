//! Game-playing agents for Isolation: fixed-depth minimax and iterative deepening alpha-beta search that always
//! answer within the caller's time budget.

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod error;
pub mod game;
pub mod isolation;
pub mod minimax;
pub mod search;
pub mod tournament;

pub use agent::Agent;
pub use error::{ConfigError, SearchTimeout};
pub use game::{Game, Move, Player};
pub use isolation::Board;
