use tracing::warn;

use crate::agent::Agent;
use crate::game::{Game, Move};
use crate::minimax::minimax_search;
use crate::search::{Clock, Evaluator};

/// Fixed-depth minimax player.
pub struct MinimaxAgent<E> {
    search_depth: u32,
    evaluator: E,
    timeout: f64,
}

impl<E> MinimaxAgent<E> {
    pub fn new(search_depth: u32, evaluator: E, timeout: f64) -> Self {
        assert!(search_depth > 0, "Search depth needs to be positive");

        MinimaxAgent {
            search_depth,
            evaluator,
            timeout,
        }
    }
}

impl<G, E> Agent<G> for MinimaxAgent<E>
where
    G: Game,
    E: Evaluator<G>,
{
    fn get_move(&mut self, game: &G, time_left: &dyn Fn() -> f64) -> Move {
        let clock = Clock::new(time_left, self.timeout);

        // use first legal move as a fallback in case the search doesn't complete
        let fallback_move = game.active_legal_moves().first().copied().unwrap_or(Move::NONE);

        match minimax_search(game, self.search_depth, &self.evaluator, &clock) {
            Ok((best_move, _)) => best_move,
            Err(_) => {
                warn!(depth = self.search_depth, %fallback_move, "minimax timed out, using fallback move");
                fallback_move
            }
        }
    }
}

/*====================================================================================================================*/
