use std::fmt::{Debug, Display};

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

// opponent of the player, i.e. One -> Two and Two -> One
impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/*====================================================================================================================*/

/// Target cell of a move as (row, col).
///
/// `Move::NONE` is (-1, -1) and means "no legal move available"; it is never a board coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: i8,
    col: i8,
}

impl Move {
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 128 && col < 128, "Coordinates need to be smaller than 128");

        Move {
            row: row as i8,
            col: col as i8,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Move::NONE
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {})", self.row, self.col)
    }
}

/*====================================================================================================================*/

/// Board capability consumed by the search engines.
///
/// Implementors are values: `forecast_move` returns a new state and leaves `self` untouched.
pub trait Game: Clone {
    fn active_player(&self) -> Player;

    /// Legal moves of `player` in a deterministic order.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// State after the active player makes `move_`; `move_` has to be legal.
    fn forecast_move(&self, move_: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    fn active_legal_moves(&self) -> Vec<Move> {
        self.legal_moves(self.active_player())
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::{Move, Player};

    #[test]
    fn test_player_not() {
        assert_eq!(!Player::One, Player::Two);
        assert_eq!(!!Player::One, Player::One);
    }

    #[test]
    fn test_move_none() {
        assert!(Move::NONE.is_none());
        assert!(!Move::new(0, 0).is_none());
        assert_eq!(Move::NONE.row(), -1);
        assert_eq!(Move::NONE.col(), -1);
        assert_eq!(format!("{}", Move::new(2, 3)), "(2, 3)");
    }
}
