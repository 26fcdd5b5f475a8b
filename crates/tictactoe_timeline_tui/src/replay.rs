//! Headless replay: play a list of cells and print the resulting view.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_timeline::{GameStatus, LineKind, MoveOrder, Player, Position, Timeline};
use tracing::{info, instrument, warn};

/// Plays `cells` in order, then optionally jumps to snapshot `jump`.
///
/// Moves into occupied squares or after a win are ignored exactly as a click
/// would be. A jump past the end of history is reported as an error.
#[instrument]
pub fn replay(cells: &[Position], jump: Option<usize>, order: MoveOrder) -> Result<Timeline> {
    let mut timeline = Timeline::with_order(order);

    for &pos in cells {
        if let Err(e) = timeline.try_play(pos) {
            warn!(position = %pos, error = %e, "Move ignored");
        }
    }

    if let Some(index) = jump {
        timeline
            .try_jump_to(index)
            .with_context(|| format!("Cannot jump to move #{}", index))?;
    }

    info!(
        moves = timeline.last_index(),
        current = timeline.current_index(),
        "Replay finished"
    );
    Ok(timeline)
}

/// Serializable view of a timeline, as printed by `replay --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Marks of the displayed board, row-major; `null` for empty squares.
    pub board: Vec<Option<Player>>,
    /// `Winner: X`, `Next player: O` or `Draw`.
    pub status: String,
    /// Winning mark, if any.
    pub winner: Option<Player>,
    /// Cells of the highlighted line.
    pub winning_line: Option<[usize; 3]>,
    /// Orientation of the highlighted line.
    pub line_kind: Option<LineKind>,
    /// Index of the displayed snapshot.
    pub current_move: usize,
    /// List order.
    pub order: MoveOrder,
    /// Move list entries in display order.
    pub moves: Vec<String>,
}

impl From<&Timeline> for ReplaySummary {
    fn from(timeline: &Timeline) -> Self {
        let status = timeline.status();
        let line = match status {
            GameStatus::Winner { line, .. } => Some(line),
            _ => None,
        };
        Self {
            board: timeline
                .current_board()
                .squares()
                .iter()
                .map(|square| square.player())
                .collect(),
            status: status.to_string(),
            winner: status.winner(),
            winning_line: line.map(|l| l.indices()),
            line_kind: line.map(|l| l.kind()),
            current_move: timeline.current_index(),
            order: timeline.order(),
            moves: timeline
                .move_entries()
                .iter()
                .map(|entry| entry.description())
                .collect(),
        }
    }
}

/// Plain-text rendering of the displayed snapshot and move list.
pub fn render_text(timeline: &Timeline) -> String {
    let mut out = String::new();
    out.push_str(&timeline.status().to_string());
    out.push_str("\n\n");
    out.push_str(&timeline.current_board().display());
    out.push_str("\n\n");
    out.push_str(&timeline.move_indicator());
    out.push('\n');
    out.push_str(&format!("Current Order: {}\n", timeline.order()));
    for entry in timeline.move_entries() {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.description()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).expect("valid cell"))
            .collect()
    }

    #[test]
    fn test_replay_ignores_illegal_moves() {
        let timeline = replay(&cells(&[4, 4, 0]), None, MoveOrder::Ascending).expect("valid cells");
        assert_eq!(timeline.last_index(), 2);
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        assert!(replay(&cells(&[4]), Some(2), MoveOrder::Ascending).is_err());
    }

    #[test]
    fn test_summary_of_win() {
        let timeline = replay(&cells(&[0, 4, 1, 8, 2]), None, MoveOrder::Ascending).expect("valid cells");
        let summary = ReplaySummary::from(&timeline);

        assert_eq!(summary.status, "Winner: X");
        assert_eq!(summary.winning_line, Some([0, 1, 2]));
        assert_eq!(summary.line_kind, Some(LineKind::Row));
        assert_eq!(summary.board[4], Some(Player::O));
        assert_eq!(summary.board[3], None);
        assert_eq!(summary.moves.len(), 6);
    }

    #[test]
    fn test_render_text_marks_current_entry() {
        let timeline = replay(&cells(&[4, 0]), Some(1), MoveOrder::Descending).expect("valid cells");
        let text = render_text(&timeline);

        assert!(text.starts_with("Next player: O\n"));
        assert!(text.contains("You are at move #1"));
        assert!(text.contains("Current Order: Descending"));
        assert!(text.contains("> Go to move #1 (2, 2)"));
        let entries: Vec<&str> = text.lines().filter(|l| l.contains("Go to")).collect();
        assert_eq!(
            entries,
            vec![
                "  Go to move #2 (1, 1)",
                "> Go to move #1 (2, 2)",
                "  Go to game start"
            ]
        );
    }
}
