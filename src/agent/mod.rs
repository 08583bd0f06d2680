mod alphabeta_agent;
mod base_agent;
mod minimax_agent;
mod random_agent;

pub use alphabeta_agent::AlphaBetaAgent;
pub use base_agent::Agent;
pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;
