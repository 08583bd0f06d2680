use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::Agent;
use crate::game::{Game, Move};

/// agent that picks a uniformly random legal move, used as a baseline and for random openings
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        RandomAgent { rng }
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn get_move(&mut self, game: &G, _time_left: &dyn Fn() -> f64) -> Move {
        game.active_legal_moves().choose(&mut self.rng).copied().unwrap_or(Move::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomAgent;
    use crate::agent::Agent;
    use crate::game::{Game, Move};
    use crate::isolation::Board;

    #[test]
    fn test_random_moves_are_legal() {
        let mut board = Board::new(4, 4);
        let mut agent = RandomAgent::new(Some(3));
        let time_left = || 100.0;

        loop {
            let move_ = agent.get_move(&board, &time_left);

            if board.active_legal_moves().is_empty() {
                assert_eq!(move_, Move::NONE);
                break;
            }

            assert!(board.is_legal_move(move_));
            board.apply_move(move_);
        }
    }
}
