//! Derived, render-ready output of a [`Timeline`].
//!
//! Nothing here is stored: the status, the highlighted line and the move list
//! are recomputed from the snapshot at the current index each time they are
//! asked for. Jumping away from a winning snapshot therefore drops the
//! highlight, and jumping back restores it.

use super::rules::{self, Line};
use super::{MoveOrder, Player, Position, Timeline};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the snapshot on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed `line`.
    #[display("Winner: {player}")]
    Winner {
        /// The winning mark.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// Board full with no winner.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Whether more moves can be played from this snapshot.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::NextPlayer(_))
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub move_number: usize,
    /// Square filled by the move; `None` for the game start.
    pub location: Option<Position>,
    /// Whether this snapshot is on display.
    pub is_current: bool,
}

impl MoveEntry {
    /// Button text, e.g. `Go to move #3 (1, 2)`.
    pub fn description(&self) -> String {
        match self.location {
            Some(pos) if self.move_number > 0 => {
                format!("Go to move #{} ({}, {})", self.move_number, pos.row(), pos.col())
            }
            _ => "Go to game start".to_string(),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

impl Timeline {
    /// Status of the snapshot on display.
    #[instrument(skip(self), fields(current = self.current_index()))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match rules::winning_line(board) {
            Some(line) => match board.get(line.cells()[0]).player() {
                Some(player) => GameStatus::Winner { player, line },
                None => GameStatus::NextPlayer(self.to_move()),
            },
            None if rules::is_draw(board) => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// The line to highlight on the snapshot on display.
    pub fn highlighted_line(&self) -> Option<Line> {
        rules::winning_line(self.current_board())
    }

    /// Every snapshot as a list entry, in the timeline's order.
    ///
    /// The location of move `k` is found by diffing snapshot `k` against
    /// snapshot `k - 1`.
    #[instrument(skip(self), fields(order = %self.order()))]
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        let snapshots = self.snapshots();
        let mut entries: Vec<MoveEntry> = snapshots
            .iter()
            .enumerate()
            .map(|(move_number, board)| MoveEntry {
                move_number,
                location: move_number
                    .checked_sub(1)
                    .and_then(|prev| board.changed_from(&snapshots[prev])),
                is_current: move_number == self.current_index(),
            })
            .collect();

        if self.order() == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// The `You are at move #n` indicator.
    pub fn move_indicator(&self) -> String {
        format!("You are at move #{}", self.current_index())
    }
}
