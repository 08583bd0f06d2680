use tracing::debug;

use crate::error::SearchTimeout;
use crate::game::{Game, Move, Player};
use crate::search::{Clock, Evaluator, SearchStats, Valuation};

/*====================================================================================================================*/

/// Result of one fully completed deepening iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub depth: u32,
    pub best_move: Move,
    pub value: Valuation,
}

/// Best move of the deepest completed iteration.
///
/// Owned by the caller of `iterative_deepening`, so it keeps its last value when a deeper iteration is aborted.
#[derive(Debug, Clone)]
pub struct BestMoveRecord {
    best_move: Move,
    iterations: Vec<Iteration>,
}

impl BestMoveRecord {
    /// `fallback` is returned if no iteration ever completes
    pub fn new(fallback: Move) -> Self {
        BestMoveRecord {
            best_move: fallback,
            iterations: Vec::new(),
        }
    }

    pub fn best_move(&self) -> Move {
        self.best_move
    }

    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    pub fn completed_depth(&self) -> u32 {
        self.iterations.last().map_or(0, |iteration| iteration.depth)
    }

    fn complete(&mut self, iteration: Iteration) {
        self.best_move = iteration.best_move;
        self.iterations.push(iteration);
    }
}

/*====================================================================================================================*/

/// Depth-limited minimax with alpha-beta pruning, from the point of view of `player`.
pub struct AlphaBetaWorker<'a, E> {
    evaluator: &'a E,
    clock: &'a Clock<'a>,
    player: Player,

    stats: SearchStats,

    // whether the current iteration cut off any node that still had moves
    depth_limited: bool,
}

impl<'a, E> AlphaBetaWorker<'a, E> {
    pub fn new(evaluator: &'a E, clock: &'a Clock<'a>, player: Player) -> Self {
        AlphaBetaWorker {
            evaluator,
            clock,
            player,
            stats: SearchStats::new(),
            depth_limited: false,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the evaluation if `game` is a leaf at this depth, `None` if it has to be expanded.
    fn leaf_value<G>(&mut self, game: &G, depth: u32, legal_moves: &[Move]) -> Option<Valuation>
    where
        G: Game,
        E: Evaluator<G>,
    {
        if legal_moves.is_empty() {
            // terminal
        } else if depth == 0 {
            self.depth_limited = true;
        } else {
            return None;
        }

        self.stats.leaves_evaluated += 1;
        Some(self.evaluator.score(game, self.player))
    }

    fn max_value<G>(
        &mut self,
        game: &G,
        depth: u32,
        alpha: Valuation,
        beta: Valuation,
    ) -> Result<(Move, Valuation), SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.clock.check()?;
        self.stats.nodes_visited += 1;

        let legal_moves = game.active_legal_moves();

        if let Some(value) = self.leaf_value(game, depth, &legal_moves) {
            return Ok((Move::NONE, value));
        }

        let mut best_move = Move::NONE;
        let mut best_value = Valuation::LOSS;
        let mut alpha = alpha;

        for move_ in legal_moves {
            let (_, value) = self.min_value(&game.forecast_move(move_), depth - 1, alpha, beta)?;

            if value > best_value {
                best_move = move_;
                best_value = value;
            }
            if best_value >= beta {
                // beta cutoff, return early
                return Ok((best_move, best_value));
            }
            if best_value > alpha {
                alpha = best_value;
            }
        }

        Ok((best_move, best_value))
    }

    fn min_value<G>(
        &mut self,
        game: &G,
        depth: u32,
        alpha: Valuation,
        beta: Valuation,
    ) -> Result<(Move, Valuation), SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.clock.check()?;
        self.stats.nodes_visited += 1;

        let legal_moves = game.active_legal_moves();

        if let Some(value) = self.leaf_value(game, depth, &legal_moves) {
            return Ok((Move::NONE, value));
        }

        let mut best_move = Move::NONE;
        let mut best_value = Valuation::WIN;
        let mut beta = beta;

        for move_ in legal_moves {
            let (_, value) = self.max_value(&game.forecast_move(move_), depth - 1, alpha, beta)?;

            if value < best_value {
                best_move = move_;
                best_value = value;
            }
            if best_value <= alpha {
                // alpha cutoff, return early
                return Ok((best_move, best_value));
            }
            if best_value < beta {
                beta = best_value;
            }
        }

        Ok((best_move, best_value))
    }

    /// Best root move at a fixed depth with a full window.
    ///
    /// The move is `Move::NONE` if the root has no legal moves or every move loses by force, since only a strict
    /// improvement over `Valuation::LOSS` records a move.
    pub fn alphabeta<G>(&mut self, game: &G, depth: u32) -> Result<(Move, Valuation), SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.clock.check()?;
        self.depth_limited = false;

        self.max_value(game, depth, Valuation::LOSS, Valuation::WIN)
    }

    /// Searches at depth 1, 2, 3, ... and stores each completed iteration in `record`.
    ///
    /// Stops on timeout (returned as `Err`, `record` keeps the deepest completed result), when an iteration finds no
    /// move, when a forced win is proven, when an iteration never hit the depth limit, or after `max_depth`.
    pub fn iterative_deepening<G>(
        &mut self,
        game: &G,
        max_depth: Option<u32>,
        record: &mut BestMoveRecord,
    ) -> Result<(), SearchTimeout>
    where
        G: Game,
        E: Evaluator<G>,
    {
        for depth in 1.. {
            if max_depth.is_some_and(|max_depth| depth > max_depth) {
                break;
            }

            let (best_move, value) = self.alphabeta(game, depth)?;

            if best_move.is_none() {
                debug!(depth, "no move improves on a forced loss, keeping {}", record.best_move());
                break;
            }

            record.complete(Iteration {
                depth,
                best_move,
                value,
            });

            debug!(
                depth,
                %best_move,
                %value,
                nodes = self.stats.nodes_visited,
                "completed deepening iteration"
            );

            if value.is_win() {
                debug!(depth, "found certain win");
                break;
            }

            if !self.depth_limited {
                // whole tree searched, deeper iterations can't change the result
                break;
            }
        }

        Ok(())
    }
}

/*====================================================================================================================*/
