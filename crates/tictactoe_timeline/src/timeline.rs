//! The game state container: snapshots, current index, and list order.

use super::error::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::order::MoveOrder;
use super::rules;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Full move history with a cursor into it.
///
/// `snapshots[0]` is always the empty board and `snapshots[k]` is the board
/// after move `k`. The cursor (`current`) selects which snapshot is shown and
/// decides whose turn it is: X on even indices, O on odd ones.
///
/// Deserialized timelines are checked against [`TimelineInvariants`], so a
/// history that normal play could not produce is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
    pub(crate) order: MoveOrder,
}

/// Unchecked serialized form of a [`Timeline`].
#[derive(Deserialize)]
struct RawTimeline {
    snapshots: Vec<Board>,
    current: usize,
    #[serde(default)]
    order: MoveOrder,
}

impl TryFrom<RawTimeline> for Timeline {
    type Error = MoveError;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let timeline = Self {
            snapshots: raw.snapshots,
            current: raw.current,
            order: raw.order,
        };
        TimelineInvariants::check_all(&timeline).map_err(violation_error)?;
        Ok(timeline)
    }
}

fn violation_error(violations: Vec<InvariantViolation>) -> MoveError {
    let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
    MoveError::InvariantViolation(descriptions.join("; "))
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates an empty timeline listing moves in `order`.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
            order,
        }
    }

    /// All snapshots, game start first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the snapshot on display.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Whether the newest snapshot is on display.
    pub fn is_at_latest(&self) -> bool {
        self.current == self.last_index()
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Player whose mark the next play writes.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current)
    }

    /// Current list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Plays `pos` for the player to move, reporting why a move was refused.
    ///
    /// Any snapshots after the current one are discarded before the new one
    /// is appended, so playing from a past position starts a new branch.
    #[instrument(skip(self), fields(current = self.current, player = %self.to_move()))]
    pub fn try_play(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = *self.current_board();

        if let Some(winner) = rules::winner(&board) {
            return Err(MoveError::GameOver(winner));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = self.clone();
        next.snapshots.truncate(self.current + 1);
        next.snapshots.push(board.with_mark(pos, self.to_move()));
        next.current = next.last_index();

        #[cfg(debug_assertions)]
        TimelineInvariants::check_all(&next).map_err(violation_error)?;

        let discarded = self.last_index() - self.current;
        if discarded > 0 {
            debug!(discarded, "Discarding abandoned future");
        }
        *self = next;
        debug!(move_number = self.current, "Move applied");
        Ok(())
    }

    /// Plays `pos`; occupied squares and finished games are silently ignored.
    pub fn play(&mut self, pos: Position) {
        if let Err(e) = self.try_play(pos) {
            debug!(error = %e, position = %pos, "Ignoring move");
        }
    }

    /// Shows snapshot `index`, refusing indices past the end of history.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index > self.last_index() {
            return Err(MoveError::NoSuchMove {
                requested: index,
                last: self.last_index(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Shows snapshot `index`; out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if let Err(e) = self.try_jump_to(index) {
            debug!(error = %e, "Ignoring jump");
        }
    }

    /// Shows the previous snapshot, if any.
    pub fn step_back(&mut self) {
        if let Some(index) = self.current.checked_sub(1) {
            self.jump_to(index);
        }
    }

    /// Shows the next snapshot, if any.
    pub fn step_forward(&mut self) {
        self.jump_to(self.current + 1);
    }

    /// Shows the empty board.
    pub fn jump_to_start(&mut self) {
        self.jump_to(0);
    }

    /// Shows the newest snapshot.
    pub fn jump_to_latest(&mut self) {
        self.jump_to(self.last_index());
    }

    /// Flips the list order.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn played(cells: &[usize]) -> Timeline {
        let mut timeline = Timeline::new();
        for &cell in cells {
            let pos = Position::from_index(cell).expect("valid cell");
            timeline.try_play(pos).expect("legal move");
        }
        timeline
    }

    #[test]
    fn test_new_timeline_holds_empty_board() {
        let timeline = Timeline::new();
        assert_eq!(timeline.snapshots(), &[Board::new()]);
        assert_eq!(timeline.current_index(), 0);
        assert_eq!(timeline.to_move(), Player::X);
        assert!(timeline.is_at_latest());
    }

    #[test]
    fn test_play_appends_snapshot_and_alternates() {
        let timeline = played(&[4, 0]);
        assert_eq!(timeline.last_index(), 2);
        assert_eq!(timeline.current_index(), 2);
        assert_eq!(timeline.snapshots()[1].get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(timeline.snapshots()[2].get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(timeline.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_square_is_refused() {
        let mut timeline = played(&[4]);
        let before = timeline.clone();

        assert_eq!(
            timeline.try_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        timeline.play(Position::Center);
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_play_after_win_is_refused() {
        let mut timeline = played(&[0, 4, 1, 8, 2]);
        let before = timeline.clone();

        assert_eq!(timeline.try_play(Position::BottomLeft), Err(MoveError::GameOver(Player::X)));
        timeline.play(Position::BottomLeft);
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_play_from_past_discards_future() {
        let mut timeline = played(&[0, 4, 1, 8]);
        timeline.jump_to(2);
        timeline.play(Position::BottomLeft);

        assert_eq!(timeline.last_index(), 3);
        assert_eq!(timeline.current_index(), 3);
        assert!(timeline.current_board().is_empty(Position::BottomRight));
        assert_eq!(
            timeline.current_board().get(Position::BottomLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_jump_out_of_range_is_refused() {
        let mut timeline = played(&[0, 4]);
        assert_eq!(
            timeline.try_jump_to(3),
            Err(MoveError::NoSuchMove { requested: 3, last: 2 })
        );
        timeline.jump_to(7);
        assert_eq!(timeline.current_index(), 2);
    }

    #[test]
    fn test_jump_keeps_history_and_sets_turn() {
        let mut timeline = played(&[0, 4, 1]);
        timeline.jump_to(1);

        assert_eq!(timeline.last_index(), 3);
        assert_eq!(timeline.to_move(), Player::O);
        assert!(!timeline.is_at_latest());
    }

    #[test]
    fn test_step_navigation_is_clamped() {
        let mut timeline = played(&[0, 4]);
        timeline.step_forward();
        assert_eq!(timeline.current_index(), 2);

        timeline.step_back();
        timeline.step_back();
        timeline.step_back();
        assert_eq!(timeline.current_index(), 0);

        timeline.jump_to_latest();
        assert_eq!(timeline.current_index(), 2);
        timeline.jump_to_start();
        assert_eq!(timeline.current_index(), 0);
    }

    #[test]
    fn test_toggle_order_leaves_history_alone() {
        let mut timeline = played(&[0, 4]);
        timeline.jump_to(1);
        timeline.toggle_order();

        assert_eq!(timeline.order(), MoveOrder::Descending);
        assert_eq!(timeline.current_index(), 1);
        assert_eq!(timeline.last_index(), 2);
    }
}
