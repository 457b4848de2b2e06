//! First-class board invariants.
//!
//! Boards produced by [`crate::result`] from [`crate::initial_state`] always
//! satisfy these. Hosts that build boards by hand can check them here; the
//! rules themselves never require them.

use crate::rules::win::line_owners;
use crate::types::{Board, Mark};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Turns failed checks into violations, in check order.
fn collect_violations(
    checks: impl IntoIterator<Item = (bool, &'static str)>,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<InvariantViolation> = checks
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct MarkCountInvariant;

impl Invariant<Board> for MarkCountInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// Invariant: winning lines, if any, all belong to one mark.
///
/// A single move can complete two lines at once, so this bounds owners,
/// not lines.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        line_owners(board).len() <= 1
    }

    fn description() -> &'static str {
        "At most one mark owns a winning line"
    }
}

/// Every invariant a reachable board satisfies.
pub type BoardInvariants = (MarkCountInvariant, SingleWinnerInvariant);

/// Checks [`BoardInvariants`], logging each violation.
#[instrument]
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board).inspect_err(|violations| {
        for violation in violations {
            warn!(board = %board.notation(), %violation, "Board invariant failed");
        }
    })
}
