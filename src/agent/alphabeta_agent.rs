use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::agent::Agent;
use crate::alphabeta::{AlphaBetaWorker, BestMoveRecord};
use crate::game::{Game, Move};
use crate::search::{Clock, Evaluator};

/// Iterative deepening alpha-beta player.
///
/// Before searching it picks a random legal move as the answer for a search that never completes depth 1, so
/// equally bad positions don't always play out the same way. Seed it for reproducible games.
pub struct AlphaBetaAgent<E> {
    evaluator: E,
    timeout: f64,
    max_depth: Option<u32>,

    rng: StdRng,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(evaluator: E, timeout: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        AlphaBetaAgent {
            evaluator,
            timeout,
            max_depth: None,
            rng,
        }
    }

    /// stop deepening after `max_depth` plies even if there is time left
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl<G, E> Agent<G> for AlphaBetaAgent<E>
where
    G: Game,
    E: Evaluator<G>,
{
    fn get_move(&mut self, game: &G, time_left: &dyn Fn() -> f64) -> Move {
        let clock = Clock::new(time_left, self.timeout);

        let fallback_move = game.active_legal_moves().choose(&mut self.rng).copied().unwrap_or(Move::NONE);
        let mut record = BestMoveRecord::new(fallback_move);

        let mut worker = AlphaBetaWorker::new(&self.evaluator, &clock, game.active_player());

        match worker.iterative_deepening(game, self.max_depth, &mut record) {
            Ok(()) => debug!(
                depth = record.completed_depth(),
                best_move = %record.best_move(),
                nodes = worker.stats().nodes_visited,
                "search finished before the clock"
            ),
            Err(_) if record.completed_depth() == 0 => {
                warn!(%fallback_move, "no search iteration completed, using fallback move")
            }
            Err(_) => debug!(
                depth = record.completed_depth(),
                best_move = %record.best_move(),
                nodes = worker.stats().nodes_visited,
                nps = worker.stats().current_nps(),
                "search aborted by clock"
            ),
        }

        record.best_move()
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::AlphaBetaAgent;
    use crate::agent::{Agent, MinimaxAgent};
    use crate::alphabeta::AlphaBetaWorker;
    use crate::game::{Game, Move, Player};
    use crate::isolation::valuation::{center_weighted_score, improved_score};
    use crate::isolation::Board;
    use crate::minimax::minimax_search;
    use crate::search::{Clock, ValuationFn};

    fn unlimited() -> f64 {
        f64::INFINITY
    }

    fn small_board() -> Board {
        let mut board = Board::new(3, 3);
        board.place(Player::One, Move::new(0, 0));
        board.place(Player::Two, Move::new(0, 1));
        board.block(Move::new(1, 1));
        board.block(Move::new(2, 0));
        board
    }

    fn random_board(seed: u64, plies: usize) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(5, 5);

        for _ in 0..plies {
            match board.active_legal_moves().choose(&mut rng) {
                Some(&move_) => board.apply_move(move_),
                None => break,
            }
        }

        board
    }

    #[test]
    fn test_small_board_depth_two() {
        let board = small_board();

        let mut agent = AlphaBetaAgent::new(improved_score, 50.0, Some(1)).with_max_depth(Some(2));
        assert_eq!(agent.get_move(&board, &unlimited), Move::new(2, 1));

        let mut minimax = MinimaxAgent::new(2, improved_score, 50.0);
        assert_eq!(minimax.get_move(&board, &unlimited), Move::new(2, 1));
    }

    #[test]
    fn test_same_value_as_minimax() {
        let clock = Clock::unlimited();

        for seed in 0..10 {
            let board = random_board(seed, 4);

            for depth in 1..=3 {
                let (_, minimax_value) = minimax_search(&board, depth, &improved_score, &clock).unwrap();

                let mut worker = AlphaBetaWorker::new(&improved_score, &clock, board.active_player());
                let (_, alphabeta_value) = worker.alphabeta(&board, depth).unwrap();

                assert_eq!(minimax_value, alphabeta_value, "seed {} depth {}", seed, depth);
            }
        }
    }

    #[test]
    fn test_immediate_timeout_returns_legal_move() {
        let no_time = || 0.0;

        for seed in 0..10 {
            let board = random_board(seed, 3);
            let legal_moves = board.active_legal_moves();

            let mut agent = AlphaBetaAgent::new(center_weighted_score, 50.0, Some(seed));
            let move_ = agent.get_move(&board, &no_time);

            if legal_moves.is_empty() {
                assert_eq!(move_, Move::NONE);
            } else {
                assert!(legal_moves.contains(&move_));
            }
        }
    }

    #[test]
    fn test_timeout_mid_search_returns_legal_move() {
        let board = random_board(3, 2);

        let calls = Cell::new(0u32);
        let time_left = || {
            calls.set(calls.get() + 1);
            if calls.get() > 500 {
                0.0
            } else {
                1000.0
            }
        };

        let mut agent = AlphaBetaAgent::new(improved_score, 50.0, Some(7));
        let move_ = agent.get_move(&board, &time_left);

        assert!(board.active_legal_moves().contains(&move_));
    }

    #[test]
    fn test_legal_moves_through_a_whole_game() {
        let mut board = Board::new(5, 5);
        let evaluators: [ValuationFn<Board>; 2] = [improved_score, center_weighted_score];
        let mut agents =
            evaluators.map(|evaluator| AlphaBetaAgent::new(evaluator, 50.0, Some(1)).with_max_depth(Some(3)));

        loop {
            let legal_moves = board.active_legal_moves();
            let agent = &mut agents[board.active_player() as usize];
            let move_ = agent.get_move(&board, &unlimited);

            if legal_moves.is_empty() {
                assert_eq!(move_, Move::NONE);
                break;
            }

            assert!(legal_moves.contains(&move_), "{} not legal in\n{}", move_, board);
            board.apply_move(move_);
        }

        let loser = board.active_player();
        assert!(board.is_loser(loser));
        assert!(board.is_winner(!loser));
    }

    #[test]
    fn test_seeded_fallback_is_reproducible() {
        let board = random_board(1, 2);
        let no_time = || 0.0;

        let first = AlphaBetaAgent::new(improved_score, 50.0, Some(42)).get_move(&board, &no_time);
        let second = AlphaBetaAgent::new(improved_score, 50.0, Some(42)).get_move(&board, &no_time);

        assert_eq!(first, second);
    }
}
