//! Moves and the error raised when one cannot be applied.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A cell to mark, addressed by row and column.
///
/// A `Move` can name any coordinates; [`crate::result`] rejects those that
/// fall outside the 3x3 grid. Ordering is row-major, which is also the order
/// [`crate::actions`] yields legal moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 on the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine on-board moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Returns true if both coordinates are in 0..3.
    pub fn is_on_board(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Converts to a row-major square index (0-8).
    pub fn to_index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row * 3 + self.col)
        } else {
            None
        }
    }

    /// Creates a move from a row-major square index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when a move cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidMoveError {
    /// Row or column is outside 0..3.
    #[display("Move {} is outside the 3x3 board", _0)]
    OutOfBounds(Move),

    /// The addressed cell already holds a mark.
    #[display("Cell {} is already occupied by {}", _0, _1)]
    Occupied(Move, Mark),
}

impl InvalidMoveError {
    /// Returns the rejected move.
    pub fn rejected(&self) -> Move {
        match self {
            InvalidMoveError::OutOfBounds(mv) | InvalidMoveError::Occupied(mv, _) => *mv,
        }
    }
}

impl std::error::Error for InvalidMoveError {}
