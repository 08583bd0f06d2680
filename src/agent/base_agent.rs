use crate::game::{Game, Move};

pub trait Agent<G: Game> {
    /// Picks a move for the player to move in `game`.
    ///
    /// `time_left` returns the remaining milliseconds for this decision. The result is one of the legal moves, or
    /// `Move::NONE` if and only if there are none.
    fn get_move(&mut self, game: &G, time_left: &dyn Fn() -> f64) -> Move;
}
