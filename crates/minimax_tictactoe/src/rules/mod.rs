//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] value: whose turn it is, which moves are
//! legal, what a move produces, and whether (and how) the game has ended.
//! None of them mutate their input or keep state between calls.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use turn::player;
pub use win::{winner, winning_line, LINES};

use crate::action::{InvalidMoveError, Move};
use crate::invariants::{Invariant, MarkCountInvariant};
use crate::types::{Board, Cell, Mark, Utility};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Returns the starting board: nine empty cells.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns every legal move on the board.
///
/// The set iterates in row-major order, which fixes the tie-break used by
/// the search. Empty exactly when the board is full.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> BTreeSet<Move> {
    Move::ALL
        .into_iter()
        .filter(|mv| board.is_empty(*mv))
        .collect()
}

/// Returns the board produced by the player to move marking `mv`.
///
/// The mover is decided from `board` before the mark is placed. The input
/// board is left unchanged.
///
/// # Errors
///
/// - [`InvalidMoveError::OutOfBounds`] if `mv` lies outside the grid.
/// - [`InvalidMoveError::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace")]
pub fn result(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    let mark = player(board);

    match board.get(mv) {
        None => Err(InvalidMoveError::OutOfBounds(mv)),
        Some(Cell::Occupied(owner)) => Err(InvalidMoveError::Occupied(mv, owner)),
        Some(Cell::Empty) => {
            let next = board.place(mv, mark);

            // Postcondition: a consistent board stays consistent.
            if cfg!(debug_assertions)
                && MarkCountInvariant::holds(board)
                && !MarkCountInvariant::holds(&next)
            {
                warn!(%mv, ?mark, "Mark counts drifted after move");
            }

            Ok(next)
        }
    }
}

/// Returns true if the game is over: someone has won or no move is left.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || actions(board).is_empty()
}

/// Scores the board from X's point of view.
///
/// Meant for terminal boards. A board nobody has won scores
/// [`Utility::Draw`] whether or not it is finished; use [`terminal`] to
/// tell the two apart.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Mark::X) => Utility::XWins,
        Some(Mark::O) => Utility::OWins,
        None => Utility::Draw,
    }
}
