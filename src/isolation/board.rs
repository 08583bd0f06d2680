use std::fmt::Display;

use crate::game::{Game, Move, Player};

// keeps every knight step inside the i8 coordinate range
pub const MAX_SIDE: u8 = 100;

const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

/*====================================================================================================================*/

/// Isolation board: both players move like chess knights and every visited cell is blocked for the rest of the game.
///
/// A player that has not been placed yet may move to any blank cell. The player to move with no legal moves loses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,

    // row-major, true if the cell has been visited or blocked
    blocked: Box<[bool]>,

    locations: [Option<Move>; 2],

    active: Player,
    move_count: u32,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "Board needs at least one cell");
        assert!(width <= MAX_SIDE && height <= MAX_SIDE, "Board can't be larger than {0}x{0}", MAX_SIDE);

        Board {
            width,
            height,
            blocked: vec![false; width as usize * height as usize].into_boxed_slice(),
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// `None` while the player has not been placed
    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player as usize]
    }

    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i8 || col >= self.width as i8 {
            return None;
        }

        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn is_blank(&self, move_: Move) -> bool {
        match self.index(move_.row(), move_.col()) {
            Some(index) => !self.blocked[index],
            None => false,
        }
    }

    /// Blocks a cell without moving a player.
    pub fn block(&mut self, cell: Move) {
        let index = self
            .index(cell.row(), cell.col())
            .unwrap_or_else(|| panic!("Trying to block {} which is off the board", cell));

        self.blocked[index] = true;
    }

    /// Places `player` on `cell` outside the turn order, blocking the cell.
    pub fn place(&mut self, player: Player, cell: Move) {
        assert!(self.is_blank(cell), "Trying to place {} on occupied cell {}", player, cell);

        self.block(cell);
        self.locations[player as usize] = Some(cell);
    }

    pub fn blank_cells(&self) -> Vec<Move> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Move::new(row, col)))
            .filter(|&cell| self.is_blank(cell))
            .collect()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&blocked| blocked).count()
    }

    /// Constant time, without enumerating the legal moves.
    pub fn is_legal_move(&self, move_: Move) -> bool {
        if !self.is_blank(move_) {
            return false;
        }

        match self.player_location(self.active) {
            None => true,
            Some(location) => {
                let offset = (move_.row() - location.row(), move_.col() - location.col());
                KNIGHT_DIRECTIONS.contains(&offset)
            }
        }
    }

    /// Applies a move of the active player in place and passes the turn.
    pub fn apply_move(&mut self, move_: Move) {
        assert!(self.is_legal_move(move_), "Trying to apply illegal move {} for {}", move_, self.active);

        self.place(self.active, move_);
        self.active = !self.active;
        self.move_count += 1;
    }
}

impl Game for Board {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        let Some(location) = self.player_location(player) else {
            return self.blank_cells();
        };

        KNIGHT_DIRECTIONS
            .iter()
            .filter_map(|&(d_row, d_col)| {
                let row = location.row() + d_row;
                let col = location.col() + d_col;

                self.index(row, col)
                    .filter(|&index| !self.blocked[index])
                    .map(|_| Move::new(row as u8, col as u8))
            })
            .collect()
    }

    fn forecast_move(&self, move_: Move) -> Self {
        let mut next_board = self.clone();
        next_board.apply_move(move_);
        next_board
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.legal_moves(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves(self.active).is_empty()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Move::new(row, col);

                let symbol = if self.player_location(Player::One) == Some(cell) {
                    '1'
                } else if self.player_location(Player::Two) == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    '.'
                } else {
                    '#'
                };

                write!(f, " {}", symbol)?;
            }

            if row + 1 < self.height {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/*====================================================================================================================*/
