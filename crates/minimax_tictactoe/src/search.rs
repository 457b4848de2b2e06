//! Full-depth minimax search.
//!
//! X maximizes [`Utility`], O minimizes it. Every line of play is explored to
//! its terminal board: there is no pruning, depth limit, heuristic or
//! transposition table.
//!
//! Children are visited in [`actions`] order (row-major) and the best move is
//! only replaced by a strictly better one, so among equally good moves the
//! first in row-major order wins.

use crate::action::Move;
use crate::rules::{actions, player, result, terminal, utility};
use crate::types::{Board, Mark, Utility};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of searching one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game-theoretic value with both sides playing perfectly.
    pub utility: Utility,
    /// Optimal move for the player to move, `None` on a terminal board.
    pub best_move: Option<Move>,
    /// Boards visited, the root included.
    pub nodes: u64,
}

/// Which way the side to move pushes the utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Objective::Maximize,
            Mark::O => Objective::Minimize,
        }
    }

    fn flip(self) -> Self {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }

    /// Strict comparison: ties keep the incumbent.
    fn improves(self, candidate: Utility, incumbent: Utility) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }
}

/// Backs up the value of `board` with `objective` moving.
fn search(board: &Board, objective: Objective, nodes: &mut u64) -> (Utility, Option<Move>) {
    *nodes += 1;

    if terminal(board) {
        return (utility(board), None);
    }

    let mut best: Option<(Utility, Move)> = None;
    for action in actions(board) {
        // actions only yields empty on-board cells
        let Ok(child) = result(board, action) else {
            continue;
        };
        let (value, _) = search(&child, objective.flip(), nodes);
        if best.is_none_or(|(incumbent, _)| objective.improves(value, incumbent)) {
            best = Some((value, action));
        }
    }

    match best {
        Some((value, action)) => (value, Some(action)),
        None => (utility(board), None),
    }
}

/// Searches `board` to full depth for the player to move.
#[instrument(fields(board = %board.notation()))]
pub fn evaluate(board: &Board) -> Evaluation {
    let mover = player(board);
    let mut nodes = 0;
    let (utility, best_move) = search(board, Objective::for_mark(mover), &mut nodes);

    debug!(?mover, %utility, ?best_move, nodes, "Search complete");
    Evaluation {
        utility,
        best_move,
        nodes,
    }
}

/// Returns an optimal move for the player to move.
///
/// `None` if the board is terminal.
#[instrument(fields(board = %board.notation()))]
pub fn minimax(board: &Board) -> Option<Move> {
    if terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }
    evaluate(board).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{initial_state, winner};

    fn board(notation: &str) -> Board {
        notation.parse().expect("valid notation")
    }

    #[test]
    fn test_objective_ties_keep_incumbent() {
        assert!(Objective::Maximize.improves(Utility::XWins, Utility::Draw));
        assert!(!Objective::Maximize.improves(Utility::Draw, Utility::Draw));
        assert!(Objective::Minimize.improves(Utility::OWins, Utility::Draw));
        assert!(!Objective::Minimize.improves(Utility::OWins, Utility::OWins));
        assert_eq!(Objective::for_mark(Mark::O).flip(), Objective::Maximize);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXX/OO./...");
        assert_eq!(minimax(&won), None);

        let eval = evaluate(&won);
        assert_eq!(eval.utility, Utility::XWins);
        assert_eq!(eval.best_move, None);
        assert_eq!(eval.nodes, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board("XX./OO./...");
        let mv = minimax(&b).expect("X has a move");
        assert_eq!(mv, Move::new(0, 2));

        let after = result(&b, mv).expect("legal move");
        assert_eq!(winner(&after), Some(Mark::X));
    }

    #[test]
    fn test_o_blocks_threat() {
        // X threatens the top row; O must take (0, 2).
        let b = board("XX./.O./...");
        assert_eq!(minimax(&b), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_o_prefers_win_over_block() {
        let b = board("XX./OO./X..");
        let eval = evaluate(&b);
        assert_eq!(eval.best_move, Some(Move::new(1, 2)));
        assert_eq!(eval.utility, Utility::OWins);
    }

    #[test]
    fn test_last_cell() {
        let b = board("XOX/XOO/OX.");
        assert_eq!(minimax(&b), Some(Move::new(2, 2)));
        assert_eq!(evaluate(&b).nodes, 2);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let eval = evaluate(&initial_state());
        assert_eq!(eval.utility, Utility::Draw);
        // Every move draws, so the first in row-major order is kept.
        assert_eq!(eval.best_move, Some(Move::new(0, 0)));
        assert_eq!(eval.nodes, 549_946);
    }
}
