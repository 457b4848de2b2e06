//! Turn order: X moves first and the players alternate.

use crate::types::{Board, Mark};
use tracing::instrument;

/// Returns the mark whose turn it is.
///
/// X moves whenever it has not placed more marks than O.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}
