//! Application state and logic.

use crate::input::{Direction, move_cursor};
use tictactoe_timeline::{MoveOrder, Position, Timeline};
use tracing::{debug, info, instrument};

/// Something the user asked for, independent of how it was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a specific square.
    Play(Position),
    /// Play the square under the cursor.
    PlayCursor,
    /// Move the cursor one square.
    MoveCursor(Direction),
    /// Show snapshot `n`.
    JumpTo(usize),
    /// Show the previous snapshot.
    StepBack,
    /// Show the next snapshot.
    StepForward,
    /// Show the empty board.
    JumpToStart,
    /// Show the newest snapshot.
    JumpToLatest,
    /// Flip the move list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application with an empty game.
    pub fn new(order: MoveOrder) -> Self {
        Self {
            timeline: Timeline::with_order(order),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the game timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an action to the game.
    #[instrument(skip(self), fields(current = self.timeline.current_index()))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.timeline.play(pos);
            }
            Action::PlayCursor => self.timeline.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::JumpTo(index) => self.timeline.jump_to(index),
            Action::StepBack => self.timeline.step_back(),
            Action::StepForward => self.timeline.step_forward(),
            Action::JumpToStart => self.timeline.jump_to_start(),
            Action::JumpToLatest => self.timeline.jump_to_latest(),
            Action::ToggleOrder => self.timeline.toggle_order(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        debug!(
            current = self.timeline.current_index(),
            last = self.timeline.last_index(),
            status = %self.timeline.status(),
            "Action applied"
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MoveOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_timeline::Player;

    #[test]
    fn test_play_moves_cursor_to_square() {
        let mut app = App::default();
        app.apply(Action::Play(Position::TopLeft));

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.timeline().current_index(), 1);
    }

    #[test]
    fn test_play_cursor_uses_cursor_square() {
        let mut app = App::default();
        app.apply(Action::MoveCursor(Direction::Up));
        app.apply(Action::PlayCursor);

        assert!(!app.timeline().current_board().is_empty(Position::TopCenter));
        assert_eq!(app.timeline().to_move(), Player::O);
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = App::default();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            app.apply(Action::Play(pos));
        }

        app.apply(Action::JumpToStart);
        assert_eq!(app.timeline().current_index(), 0);
        app.apply(Action::StepForward);
        assert_eq!(app.timeline().current_index(), 1);
        app.apply(Action::JumpTo(2));
        assert_eq!(app.timeline().current_index(), 2);
        app.apply(Action::StepBack);
        assert_eq!(app.timeline().current_index(), 1);
        app.apply(Action::JumpToLatest);
        assert_eq!(app.timeline().current_index(), 3);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
