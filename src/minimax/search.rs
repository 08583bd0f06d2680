use tracing::debug;

use crate::error::SearchTimeout;
use crate::game::{Game, Move, Player};
use crate::search::{Clock, Evaluator, SearchStats, Valuation};

/*====================================================================================================================*/

/// Depth-limited minimax for one decision.
///
/// Every value is computed from the point of view of `player`, the player to move at the root.
pub struct MinimaxWorker<'a, E> {
    evaluator: &'a E,
    clock: &'a Clock<'a>,
    player: Player,

    stats: SearchStats,
}

impl<'a, E> MinimaxWorker<'a, E> {
    pub fn new(evaluator: &'a E, clock: &'a Clock<'a>, player: Player) -> Self {
        MinimaxWorker {
            evaluator,
            clock,
            player,
            stats: SearchStats::new(),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn evaluate<G>(&mut self, game: &G) -> Valuation
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.stats.leaves_evaluated += 1;
        self.evaluator.score(game, self.player)
    }

    fn max_value<G>(&mut self, game: &G, depth: u32) -> Result<Valuation, SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.clock.check()?;
        self.stats.nodes_visited += 1;

        let legal_moves = game.active_legal_moves();

        if depth == 0 || legal_moves.is_empty() {
            return Ok(self.evaluate(game));
        }

        let mut best_value = Valuation::LOSS;

        for move_ in legal_moves {
            let value = self.min_value(&game.forecast_move(move_), depth - 1)?;
            best_value = best_value.max(value);
        }

        Ok(best_value)
    }

    fn min_value<G>(&mut self, game: &G, depth: u32) -> Result<Valuation, SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.clock.check()?;
        self.stats.nodes_visited += 1;

        let legal_moves = game.active_legal_moves();

        if depth == 0 || legal_moves.is_empty() {
            return Ok(self.evaluate(game));
        }

        let mut best_value = Valuation::WIN;

        for move_ in legal_moves {
            let value = self.max_value(&game.forecast_move(move_), depth - 1)?;
            best_value = best_value.min(value);
        }

        Ok(best_value)
    }

    /// Best root move and its backed-up value; `Move::NONE` if the root has no legal moves.
    ///
    /// Among moves with equal value the first one in enumeration order is chosen. `depth` has to be positive.
    pub fn minimax<G>(&mut self, game: &G, depth: u32) -> Result<(Move, Valuation), SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        assert!(depth > 0, "Search depth needs to be positive");
        self.clock.check()?;
        self.stats.nodes_visited += 1;

        let legal_moves = game.active_legal_moves();

        if legal_moves.is_empty() {
            return Ok((Move::NONE, self.evaluate(game)));
        }

        let mut best_move = Move::NONE;
        let mut best_value = Valuation::LOSS;

        for move_ in legal_moves {
            let value = self.min_value(&game.forecast_move(move_), depth - 1)?;

            if best_move.is_none() || value > best_value {
                best_move = move_;
                best_value = value;
            }
        }

        Ok((best_move, best_value))
    }
}

/*====================================================================================================================*/

/// Runs a fixed-depth minimax search for the player to move in `game`.
pub fn minimax_search<G, E>(
    game: &G,
    depth: u32,
    evaluator: &E,
    clock: &Clock,
) -> Result<(Move, Valuation), SearchTimeout>
where
    G: Game,
    E: Evaluator<G>,
{
    let mut worker = MinimaxWorker::new(evaluator, clock, game.active_player());

    let result = worker.minimax(game, depth);

    match result {
        Ok((best_move, best_value)) => debug!(
            depth,
            %best_move,
            %best_value,
            nodes = worker.stats().nodes_visited,
            nps = worker.stats().current_nps(),
            "minimax search completed"
        ),
        Err(_) => debug!(
            depth,
            nodes = worker.stats().nodes_visited,
            "minimax search aborted by clock"
        ),
    }

    result
}

/*====================================================================================================================*/
