//! Tic-tac-toe rules with a perfect minimax player.
//!
//! The crate is a pure library: hosts build a [`Board`] with
//! [`initial_state`], query it with the rule functions, apply moves with
//! [`result`], and ask [`minimax`] for an optimal move.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Mark`], [`Move`], [`Utility`]
//! - **Rules**: [`player`], [`actions`], [`result`], [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] and [`evaluate`], a full-depth game-tree search
//! - **Invariants**: checks that hand-built boards could arise in real play
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{initial_state, minimax, result, terminal, utility, Utility};
//!
//! let mut board = initial_state();
//! while let Some(mv) = minimax(&board) {
//!     board = result(&board, mv).expect("minimax only suggests legal moves");
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), Utility::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Data model
pub use action::{InvalidMoveError, Move};
pub use types::{Board, Cell, Mark, ParseBoardError, Utility};

// Crate-level exports - Rules
pub use rules::{
    actions, initial_state, is_full, player, result, terminal, utility, winner, winning_line,
    LINES,
};

// Crate-level exports - Search
pub use search::{evaluate, minimax, Evaluation};

// Crate-level exports - Invariants
pub use invariants::{
    check_board, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkCountInvariant, SingleWinnerInvariant,
};
