use serde::{Deserialize, Serialize};

use crate::game::{Game, Move, Player};
use crate::isolation::Board;
use crate::search::{Valuation, ValuationFn};

/// Selects one of the heuristics below by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    Null,
    OpenMove,
    Improved,
    Center,
    #[default]
    CenterWeighted,
    Phased,
    Positional,
}

impl EvaluatorKind {
    pub fn valuation_fn(self) -> ValuationFn<Board> {
        match self {
            EvaluatorKind::Null => null_score,
            EvaluatorKind::OpenMove => open_move_score,
            EvaluatorKind::Improved => improved_score,
            EvaluatorKind::Center => center_score,
            EvaluatorKind::CenterWeighted => center_weighted_score,
            EvaluatorKind::Phased => phased_score,
            EvaluatorKind::Positional => positional_score,
        }
    }
}

/*====================================================================================================================*/

fn terminal_value(board: &Board, player: Player) -> Option<Valuation> {
    if board.is_loser(player) {
        Some(Valuation::LOSS)
    } else if board.is_winner(player) {
        Some(Valuation::WIN)
    } else {
        None
    }
}

fn move_counts(board: &Board, player: Player) -> (f64, f64) {
    let own_moves = board.legal_moves(player).len() as f64;
    let opp_moves = board.legal_moves(!player).len() as f64;

    (own_moves, opp_moves)
}

// squared distance of the player from the geometric centre of the board, zero while unplaced
fn squared_center_distance(board: &Board, player: Player) -> f64 {
    let Some(location) = board.player_location(player) else {
        return 0.0;
    };

    let w = board.width() as f64 / 2.0;
    let h = board.height() as f64 / 2.0;

    (h - location.row() as f64).powi(2) + (w - location.col() as f64).powi(2)
}

fn squared_distance(a: Move, b: Move) -> f64 {
    ((a.row() - b.row()) as f64).powi(2) + ((a.col() - b.col()) as f64).powi(2)
}

// percentage of the cells consumed so far
fn percent_completed(board: &Board) -> f64 {
    board.move_count() as f64 / (board.width() as f64 * board.height() as f64) * 100.0
}

/*====================================================================================================================*/

/// Zero for every undecided position.
pub fn null_score(board: &Board, player: Player) -> Valuation {
    terminal_value(board, player).unwrap_or(Valuation::ZERO)
}

/// Number of moves available to the player.
pub fn open_move_score(board: &Board, player: Player) -> Valuation {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }

    Valuation::new(board.legal_moves(player).len() as f64)
}

/// Own moves minus opponent moves.
pub fn improved_score(board: &Board, player: Player) -> Valuation {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }

    let (own_moves, opp_moves) = move_counts(board, player);

    Valuation::new(own_moves - opp_moves)
}

/// Squared distance from the centre of the board; higher is further out.
pub fn center_score(board: &Board, player: Player) -> Valuation {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }

    Valuation::new(squared_center_distance(board, player))
}

/// Move differential plus a bonus for being closer to the centre than the opponent, fading as the game goes on.
pub fn center_weighted_score(board: &Board, player: Player) -> Valuation {
    const CENTER_WEIGHT: f64 = 0.634;

    if let Some(value) = terminal_value(board, player) {
        return value;
    }

    let (own_moves, opp_moves) = move_counts(board, player);

    let centrality = match board.move_count() {
        0 => 0.0,
        move_count => {
            let own_distance = squared_center_distance(board, player);
            let opp_distance = squared_center_distance(board, !player);
            (opp_distance - own_distance) * CENTER_WEIGHT / move_count as f64
        }
    };

    Valuation::new(own_moves - opp_moves + centrality)
}

/// Weights mobility and centrality differently in the opening, middle game and end game.
pub fn phased_score(board: &Board, player: Player) -> Valuation {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }

    let (own_moves, opp_moves) = move_counts(board, player);

    // manhattan distance to the centre cell, rounding the centre up
    let boxes_to_center = match board.player_location(player) {
        Some(location) => {
            let center_row = (board.height() as f64 / 2.0).ceil();
            let center_col = (board.width() as f64 / 2.0).ceil();
            (location.col() as f64 - center_col).abs() + (location.row() as f64 - center_row).abs() - 1.0
        }
        None => 0.0,
    };

    let value = match percent_completed(board) {
        p if p < 10.0 => 2.0 * own_moves - 0.5 * boxes_to_center,
        p if p < 40.0 => 3.0 * own_moves - opp_moves - 0.5 * boxes_to_center,
        _ => 2.0 * own_moves - opp_moves,
    };

    Valuation::new(value)
}

/// Early on: mobility, staying close to the opponent, move quality and a penalty for the edge of the board.
/// Later: chase the opponent's mobility.
pub fn positional_score(board: &Board, player: Player) -> Valuation {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }

    let own_legal_moves = board.legal_moves(player);
    let opp_legal_moves = board.legal_moves(!player);

    let own_moves = own_legal_moves.len() as f64;
    let opp_moves = opp_legal_moves.len() as f64;

    if percent_completed(board) >= 40.0 {
        return Valuation::new(own_moves - 2.0 * opp_moves);
    }

    let (Some(own_location), Some(opp_location)) = (board.player_location(player), board.player_location(!player))
    else {
        return Valuation::new(own_moves - opp_moves);
    };

    let distance = squared_distance(own_location, opp_location);

    let on_edge = own_location.row() == 0
        || own_location.col() == 0
        || own_location.row() == board.height() as i8 - 1
        || own_location.col() == board.width() as i8 - 1;
    let penalty = if on_edge { -1.0 } else { 0.0 };

    // moves towards the opponent score higher, moves the opponent could take away score lower
    let quality: f64 = own_legal_moves
        .iter()
        .map(|&move_| {
            let move_distance = squared_distance(move_, opp_location);
            let closeness = if move_distance == 0.0 { 1.0 } else { 1.0 / move_distance };
            let contested = if opp_legal_moves.contains(&move_) { 1.0 } else { 0.0 };
            closeness - contested
        })
        .sum();

    Valuation::new(own_moves - opp_moves - distance + quality + penalty)
}

/*====================================================================================================================*/
