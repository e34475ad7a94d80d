//! Invariants that hold for every reachable board.
//!
//! Each invariant is testable on its own; [`BoardInvariants`] composes them
//! for postcondition checks.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description().to_string()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description().to_string()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description().to_string()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod terminal_consistent;
pub mod turn_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    MarkBalanceInvariant,
    TurnConsistentInvariant,
    TerminalConsistentInvariant,
);
