//! Tests for headless replay output.

use tictactoe_timeline::{LineKind, MoveOrder, Position};
use tictactoe_timeline_tui::{ReplaySummary, render_text, replay};

fn cells(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|&i| Position::from_index(i).expect("valid cell"))
        .collect()
}

#[test]
fn test_text_output_for_win() {
    let timeline = replay(&cells(&[0, 4, 1, 8, 2]), None, MoveOrder::Ascending).expect("valid cells");

    assert_eq!(
        render_text(&timeline),
        "Winner: X\n\
         \n\
         X|X|X\n\
         -+-+-\n\
         4|O|6\n\
         -+-+-\n\
         7|8|O\n\
         \n\
         You are at move #5\n\
         Current Order: Ascending\n\
         \x20 Go to game start\n\
         \x20 Go to move #1 (1, 1)\n\
         \x20 Go to move #2 (2, 2)\n\
         \x20 Go to move #3 (1, 2)\n\
         \x20 Go to move #4 (3, 3)\n\
         > Go to move #5 (1, 3)\n"
    );
}

#[test]
fn test_branch_after_jump() {
    // Play, go back two moves, and take a different line.
    let mut timeline = replay(&cells(&[0, 4, 1, 8]), Some(2), MoveOrder::Ascending).expect("valid cells");
    timeline.play(Position::BottomLeft);

    let summary = ReplaySummary::from(&timeline);
    assert_eq!(summary.current_move, 3);
    assert_eq!(summary.moves.len(), 4);
    assert_eq!(summary.moves[3], "Go to move #3 (3, 1)");
}

#[test]
fn test_json_output_for_column_win() {
    // O takes the middle column.
    let timeline = replay(&cells(&[0, 1, 3, 4, 8, 7]), None, MoveOrder::Descending).expect("valid cells");
    let json = serde_json::to_value(ReplaySummary::from(&timeline)).expect("serializable");

    assert_eq!(json["status"], "Winner: O");
    assert_eq!(json["winner"], "O");
    assert_eq!(json["winning_line"], serde_json::json!([1, 4, 7]));
    assert_eq!(json["line_kind"], serde_json::to_value(LineKind::Column).expect("serializable"));
    assert_eq!(json["order"], "descending");
    assert_eq!(json["moves"][0], "Go to move #6 (3, 2)");
    assert_eq!(json["board"][0], "X");
    assert_eq!(json["board"][2], serde_json::Value::Null);
}
