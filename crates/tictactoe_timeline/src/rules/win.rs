//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use super::lines::{LINES, Line};
use tracing::instrument;

/// Returns the first line whose three squares share the same mark.
///
/// Lines are checked rows first, then columns, then diagonals, so a board
/// with more than one complete line always reports the same one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the player owning the winning line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line.cells()[0]).player())
}

#[cfg(test)]
mod tests {
    use super::super::LineKind;
    use super::*;
    use crate::Position;

    fn board_with(player: Player, cells: &[Position]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line.cells());
                assert_eq!(winning_line(&board), Some(line));
                assert_eq!(winner(&board), Some(player));
            }
        }
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        let line = winning_line(&board).expect("top row wins");
        assert_eq!(line.kind(), LineKind::Row);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X)
            .with_mark(Position::MiddleLeft, Player::X)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::MiddleRight, Player::O)
            .with_mark(Position::BottomLeft, Player::O)
            .with_mark(Position::BottomCenter, Player::X)
            .with_mark(Position::BottomRight, Player::X);
        assert_eq!(winning_line(&board), None);
    }
}
