//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::invariants::{Invariant, MarkCountInvariant};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: every rule that "changes" a board hands back a
/// new one and leaves its input untouched. Serializes as the bare row-major
/// cell array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows, top to bottom.
    ///
    /// No invariant is checked: hosts may construct any position, including
    /// ones unreachable in real play.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, line) in rows.iter().enumerate() {
            cells[row * 3..row * 3 + 3].copy_from_slice(line);
        }
        Self { cells }
    }

    /// Gets the cell addressed by `mv`, or `None` if it lies off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.to_index().map(|index| self.cells[index])
    }

    /// Checks if the cell addressed by `mv` is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows, top to bottom.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (index, cell) in self.cells.iter().enumerate() {
            rows[index / 3][index % 3] = *cell;
        }
        rows
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Compact one-line notation, e.g. `X.O/.X./..O`.
    ///
    /// This is the same format [`Board::from_str`] accepts.
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(11);
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                out.push('/');
            }
            out.push(cell.symbol());
        }
        out
    }

    /// Returns a copy with `mark` written at `mv`.
    ///
    /// Callers must have checked that `mv` is on the board.
    pub(crate) fn place(mut self, mv: Move, mark: Mark) -> Self {
        if let Some(index) = mv.to_index() {
            self.cells[index] = Cell::Occupied(mark);
        }
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.rows().iter().enumerate() {
            let symbols: Vec<String> = line.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when board notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(usize),

    /// A character that is neither a mark nor an empty-cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),

    /// Mark counts cannot arise from X and O alternating with X first.
    #[display("Impossible mark counts: {} X and {} O", x, o)]
    MarkCount {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (either case) are marks, `.`, `-` and `_` are empty cells.
    /// Whitespace and `/` row separators are ignored.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(ParseBoardError::UnknownSymbol(other)),
            };
            if let Some(slot) = cells.get_mut(count) {
                *slot = cell;
            }
            count += 1;
        }

        if count != 9 {
            return Err(ParseBoardError::CellCount(count));
        }

        let board = Self { cells };
        if !MarkCountInvariant::holds(&board) {
            let (x, o) = (board.count(Mark::X), board.count(Mark::O));
            warn!(x, o, "Rejecting board with impossible mark counts");
            return Err(ParseBoardError::MarkCount { x, o });
        }

        Ok(board)
    }
}

/// Score of a finished game from X's point of view.
///
/// Ordered by value, so X maximizes and O minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Utility {
    /// O won (-1).
    OWins = -1,
    /// Draw, or a board that has not finished yet (0).
    Draw = 0,
    /// X won (+1).
    XWins = 1,
}

impl Utility {
    /// Numeric value: +1, 0 or -1.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl From<Utility> for i8 {
    fn from(utility: Utility) -> Self {
        utility.value()
    }
}

impl std::fmt::Display for Utility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
