//! Stateless UI rendering for the game screen.
//!
//! [`draw`] renders purely from [`App`] and returns the [`ScreenLayout`] it
//! used, which the event loop keeps for hit-testing mouse clicks.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_timeline::{GameStatus, LineKind, MoveEntry, Player, Position, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_PANEL_WIDTH: u16 = 3 * CELL_WIDTH + 4;
const TOGGLE_LABEL: &str = "[ Toggle Order ]";
const HELP: &str = "click or arrows+Enter / 1-9: play   [ ]: step   Home/End   o: order   q: quit";

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Cell(Position),
    /// A move list entry, by move number.
    Entry(usize),
    /// The order toggle button.
    ToggleOrder,
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Bordered status box.
    pub status: Rect,
    /// Squares in row-major order.
    pub cells: [Rect; 9],
    /// `You are at move #n` line.
    pub indicator: Rect,
    /// The clickable toggle button.
    pub toggle: Rect,
    /// `Current Order: ...` label next to the toggle.
    pub order_label: Rect,
    /// Bordered move list.
    pub history: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game's regions.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Status
                Constraint::Length(3 * CELL_HEIGHT), // Board
                Constraint::Length(1),               // Move indicator
                Constraint::Min(0),
            ])
            .split(body[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Toggle
                Constraint::Length(1),
                Constraint::Min(0), // History
            ])
            .split(body[1]);

        let board = left[1];
        let cells = Position::ALL.map(|pos| {
            Rect {
                x: board.x + 2 + (pos.col() as u16 - 1) * CELL_WIDTH,
                y: board.y + (pos.row() as u16 - 1) * CELL_HEIGHT,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            }
            .intersection(board)
        });

        let toggle_row = right[0];
        let toggle_width = (TOGGLE_LABEL.len() as u16).min(toggle_row.width);
        let toggle = Rect {
            width: toggle_width,
            ..toggle_row
        };
        let order_label = Rect {
            x: toggle_row.x + toggle_width,
            width: toggle_row.width - toggle_width,
            ..toggle_row
        };

        Self {
            title: rows[0],
            status: left[0],
            cells,
            indicator: left[2],
            toggle,
            order_label,
            history: right[2],
            help: rows[2],
        }
    }

    /// Rows inside the move list border, one per entry.
    pub fn history_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.history)
    }

    /// Finds the clickable region at a terminal coordinate.
    ///
    /// `entries` must be the list as drawn, in display order.
    pub fn hit(&self, column: u16, row: u16, entries: &[MoveEntry]) -> Option<Target> {
        let point = ScreenPosition::new(column, row);

        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
        {
            return Some(Target::Cell(pos));
        }

        if self.toggle.contains(point) {
            return Some(Target::ToggleOrder);
        }

        let inner = self.history_inner();
        if inner.contains(point) {
            let offset = usize::from(row - inner.y);
            return entries.get(offset).map(|entry| Target::Entry(entry.move_number));
        }

        None
    }
}

/// Edges to draw in the highlight color for a square on a winning line.
///
/// Diagonal wins outline each square. Row wins draw top and bottom edges,
/// closing the ends with left and right edges; columns are the transpose.
pub fn highlight_borders(kind: LineKind, is_first: bool, is_last: bool) -> Borders {
    match kind {
        LineKind::Diagonal => Borders::ALL,
        LineKind::Row => {
            let mut borders = Borders::TOP | Borders::BOTTOM;
            if is_first {
                borders |= Borders::LEFT;
            }
            if is_last {
                borders |= Borders::RIGHT;
            }
            borders
        }
        LineKind::Column => {
            let mut borders = Borders::LEFT | Borders::RIGHT;
            if is_first {
                borders |= Borders::TOP;
            }
            if is_last {
                borders |= Borders::BOTTOM;
            }
            borders
        }
    }
}

/// Renders the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());
    let timeline = app.timeline();
    let status = timeline.status();

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_status(frame, layout.status, &status);
    draw_board(frame, &layout, app);

    frame.render_widget(Paragraph::new(timeline.move_indicator()), layout.indicator);

    let toggle = Paragraph::new(Span::styled(
        TOGGLE_LABEL,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    frame.render_widget(toggle, layout.toggle);
    frame.render_widget(
        Paragraph::new(format!(" Current Order: {}", timeline.order())),
        layout.order_label,
    );

    draw_history(frame, layout.history, &timeline.move_entries());

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout.help);

    layout
}

fn draw_status(frame: &mut Frame, area: Rect, status: &GameStatus) {
    let color = match status {
        GameStatus::Winner { .. } => Color::Green,
        GameStatus::NextPlayer(_) => Color::Yellow,
        GameStatus::Draw => Color::Magenta,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let board = app.timeline().current_board();
    let highlighted = app.timeline().highlighted_line();

    for pos in Position::ALL {
        let area = layout.cells[pos.to_index()];

        let (symbol, base_style) = match board.get(pos) {
            Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
            Square::Occupied(Player::X) => (
                "X",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        let style = if pos == app.cursor() {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(cell, area);

        if let Some(line) = highlighted.filter(|line| line.contains(pos)) {
            let edges = highlight_borders(line.kind(), line.starts_at(pos), line.ends_at(pos));
            let overlay = Block::default()
                .borders(edges)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Green));
            frame.render_widget(overlay, area);
        }
    }
}

fn draw_history(frame: &mut Frame, area: Rect, entries: &[MoveEntry]) {
    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            if entry.is_current {
                Line::from(Span::styled(
                    format!("> {}", entry.description()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", entry.description()))
            }
        })
        .collect();

    let list = Paragraph::new(lines).block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_highlight_closes_ends() {
        assert_eq!(
            highlight_borders(LineKind::Row, true, false),
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        );
        assert_eq!(
            highlight_borders(LineKind::Row, false, false),
            Borders::TOP | Borders::BOTTOM
        );
        assert_eq!(
            highlight_borders(LineKind::Row, false, true),
            Borders::TOP | Borders::BOTTOM | Borders::RIGHT
        );
    }

    #[test]
    fn test_column_highlight_closes_ends() {
        assert_eq!(
            highlight_borders(LineKind::Column, true, false),
            Borders::LEFT | Borders::RIGHT | Borders::TOP
        );
        assert_eq!(
            highlight_borders(LineKind::Column, false, true),
            Borders::LEFT | Borders::RIGHT | Borders::BOTTOM
        );
    }

    #[test]
    fn test_diagonal_highlight_outlines() {
        assert_eq!(highlight_borders(LineKind::Diagonal, false, false), Borders::ALL);
    }

    #[test]
    fn test_cells_tile_the_board() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let top_left = layout.cells[0];
        let center = layout.cells[4];

        assert_eq!(top_left.width, CELL_WIDTH);
        assert_eq!(center.x, top_left.x + CELL_WIDTH);
        assert_eq!(center.y, top_left.y + CELL_HEIGHT);
    }

    #[test]
    fn test_hit_cells_and_toggle() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let center = layout.cells[4];

        assert_eq!(
            layout.hit(center.x + 1, center.y + 1, &[]),
            Some(Target::Cell(Position::Center))
        );
        assert_eq!(
            layout.hit(layout.toggle.x, layout.toggle.y, &[]),
            Some(Target::ToggleOrder)
        );
        assert_eq!(layout.hit(layout.help.x, layout.help.y, &[]), None);
    }

    #[test]
    fn test_hit_history_entries_in_display_order() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let inner = layout.history_inner();
        let entries = [
            MoveEntry {
                move_number: 2,
                location: Some(Position::TopLeft),
                is_current: true,
            },
            MoveEntry {
                move_number: 1,
                location: Some(Position::Center),
                is_current: false,
            },
        ];

        assert_eq!(layout.hit(inner.x, inner.y, &entries), Some(Target::Entry(2)));
        assert_eq!(layout.hit(inner.x, inner.y + 1, &entries), Some(Target::Entry(1)));
        assert_eq!(layout.hit(inner.x, inner.y + 2, &entries), None);
    }
}
