//! Win detection logic for tic-tac-toe.

use crate::action::Move;
use crate::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines, in the order they are checked:
/// rows top to bottom, columns left to right, then the main diagonal and
/// the anti-diagonal.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns the mark owning `line`, if all three cells hold it.
fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Mark> {
    let mark = board.get(a)?.mark()?;
    let owns = |mv: Move| board.get(mv).and_then(Cell::mark) == Some(mark);
    if owns(b) && owns(c) {
        Some(mark)
    } else {
        None
    }
}

/// Returns the first completed line and its owner.
///
/// Lines are scanned in [`LINES`] order, which only matters for boards that
/// could not arise in real play.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Mark, [Move; 3])> {
    LINES
        .into_iter()
        .find_map(|line| line_owner(board, line).map(|mark| (mark, line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark fills a row, column or diagonal,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Returns every mark that owns at least one line, X first.
///
/// Reachable boards yield at most one.
pub fn line_owners(board: &Board) -> Vec<Mark> {
    Mark::iter()
        .filter(|mark| {
            LINES
                .into_iter()
                .any(|line| line_owner(board, line) == Some(*mark))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().expect("valid notation")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let b = board("XXX/OO./...");
        assert_eq!(winner(&b), Some(Mark::X));
        assert_eq!(
            winning_line(&b),
            Some((Mark::X, [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]))
        );
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.OX")), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonals() {
        assert_eq!(winner(&board("OX./XOX/..O")), Some(Mark::O));
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./O../O..")), None);
    }

    #[test]
    fn test_scan_order_on_unreachable_boards() {
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let e = Cell::Empty;

        // Top row is checked before the bottom row.
        let rows = Board::from_rows([[o, o, o], [e, e, e], [x, x, x]]);
        assert_eq!(winner(&rows), Some(Mark::O));

        // Left column is checked before the right column.
        let columns = Board::from_rows([[x, e, o], [x, e, o], [x, e, o]]);
        assert_eq!(winner(&columns), Some(Mark::X));
        assert_eq!(line_owners(&columns), vec![Mark::X, Mark::O]);
    }

    #[test]
    fn test_double_line_single_owner() {
        // X's last move at the center completes both diagonals.
        let b = board("XOX/OXO/XOX");
        assert_eq!(winner(&b), Some(Mark::X));
        assert_eq!(line_owners(&b), vec![Mark::X]);
    }
}
