//! Translation of terminal events into [`Action`]s.

use crate::app::Action;
use crate::ui::{ScreenLayout, Target};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_timeline::{MoveEntry, Position};

/// Cursor step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// Moves the cursor one square, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Action::Play(Position::from_index(digit - 1)?)
        }
        KeyCode::Char('o') => Action::ToggleOrder,
        KeyCode::Char('[') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        KeyCode::Home => Action::JumpToStart,
        KeyCode::End => Action::JumpToLatest,
        _ => return None,
    };
    Some(action)
}

/// Maps a left click to an action by hit-testing the drawn layout.
pub fn mouse_action(mouse: MouseEvent, layout: &ScreenLayout, entries: &[MoveEntry]) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    match layout.hit(mouse.column, mouse.row, entries)? {
        Target::Cell(pos) => Some(Action::Play(pos)),
        Target::Entry(move_number) => Some(Action::JumpTo(move_number)),
        Target::ToggleOrder => Some(Action::ToggleOrder),
    }
}

/// Maps any terminal event to an action.
pub fn event_action(event: &Event, layout: &ScreenLayout, entries: &[MoveEntry]) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(*key),
        Event::Mouse(mouse) => mouse_action(*mouse, layout, entries),
        _ => None,
    }
}
