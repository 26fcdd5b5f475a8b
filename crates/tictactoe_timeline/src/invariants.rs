//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every timeline
//! reachable through normal play. They are checked in debug builds before a
//! move is committed and can be tested independently.

use super::rules;
use super::{Player, Timeline};

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
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Invariant: history starts empty and the cursor points into it.
pub struct CursorInRange;

impl Invariant<Timeline> for CursorInRange {
    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();
        !snapshots.is_empty()
            && snapshots[0].occupied() == 0
            && timeline.current_index() < snapshots.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the cursor is in range"
    }
}

/// Invariant: consecutive snapshots differ in exactly one newly filled square.
pub struct SingleCellDelta;

impl Invariant<Timeline> for SingleCellDelta {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let [before, after] = pair else { return false };
            after.differences(before) == 1
                && after
                    .changed_from(before)
                    .is_some_and(|pos| before.is_empty(pos))
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

/// Invariant: move `k` is played by X when `k` is odd, by O when even.
pub struct AlternatingMarks;

impl Invariant<Timeline> for AlternatingMarks {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let [before, after] = pair else { return false };
                after
                    .changed_from(before)
                    .and_then(|pos| after.get(pos).player())
                    == Some(Player::for_move(k))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: no snapshot follows one that already has a winner.
pub struct NoMoveAfterWin;

impl Invariant<Timeline> for NoMoveAfterWin {
    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();
        snapshots[..snapshots.len().saturating_sub(1)]
            .iter()
            .all(|board| rules::winning_line(board).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a win"
    }
}

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (CursorInRange, SingleCellDelta, AlternatingMarks, NoMoveAfterWin);
