//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and are asserted in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: &'static str) -> Self {
        Self { description }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
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
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod non_empty_history;
pub mod single_cell_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use non_empty_history::NonEmptyHistoryInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    NonEmptyHistoryInvariant,
    CursorInBoundsInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameHistory, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]);
        game.jump_to(1);
        game.apply_move(Position::BottomRight);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameHistory::replay(&[Position::Center]);
        // Snapshot 0 no longer empty and cursor past the end.
        game.snapshots[0] = Board::new().with_mark(Position::TopLeft, Player::O);
        game.cursor = 7;

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description).collect();
        assert!(descriptions.contains(&NonEmptyHistoryInvariant::description()));
        assert!(descriptions.contains(&CursorInBoundsInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (NonEmptyHistoryInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
