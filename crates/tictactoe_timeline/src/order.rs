//! Display order of the move list.

use serde::{Deserialize, Serialize};

/// Order in which history entries are listed.
///
/// Display-only: flipping it never touches history or the current index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    #[display("Ascending")]
    Ascending,
    /// Latest move first.
    #[display("Descending")]
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
