//! Reasons a timeline operation was refused.

use super::{Player, Position};

/// Error that can occur when playing a move or moving through history.
///
/// The timeline's plain operations swallow these; the `try_*` variants
/// hand them back so callers can log or display the reason.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed snapshot already has a winner.
    #[display("Game is already over: {_0} won")]
    GameOver(#[error(not(source))] Player),

    /// The requested move index is past the end of history.
    #[display("No move #{requested}; history ends at move #{last}")]
    NoSuchMove {
        /// Requested move index.
        requested: usize,
        /// Last valid move index.
        last: usize,
    },

    /// A history invariant does not hold for the resulting timeline.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}
