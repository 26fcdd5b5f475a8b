//! The eight fixed winning lines.

use super::super::Position;
use serde::{Deserialize, Serialize};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Horizontal line.
    #[display("row")]
    Row,
    /// Vertical line.
    #[display("column")]
    Column,
    /// Either diagonal.
    #[display("diagonal")]
    Diagonal,
}

/// Three cells forming a line, ordered by board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: [Position; 3],
}

impl Line {
    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// Orientation of the line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// Whether `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Whether `pos` is the first cell of the line.
    pub fn starts_at(&self, pos: Position) -> bool {
        self.cells[0] == pos
    }

    /// Whether `pos` is the last cell of the line.
    pub fn ends_at(&self, pos: Position) -> bool {
        self.cells[2] == pos
    }
}

/// Winning lines in evaluation order: rows, columns, then diagonals.
pub const LINES: [Line; 8] = {
    use LineKind::*;
    use Position::*;
    [
        // Rows
        Line::new(Row, [TopLeft, TopCenter, TopRight]),
        Line::new(Row, [MiddleLeft, Center, MiddleRight]),
        Line::new(Row, [BottomLeft, BottomCenter, BottomRight]),
        // Columns
        Line::new(Column, [TopLeft, MiddleLeft, BottomLeft]),
        Line::new(Column, [TopCenter, Center, BottomCenter]),
        Line::new(Column, [TopRight, MiddleRight, BottomRight]),
        // Diagonals
        Line::new(Diagonal, [TopLeft, Center, BottomRight]),
        Line::new(Diagonal, [TopRight, Center, BottomLeft]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_match_index_triples() {
        let triples: Vec<[usize; 3]> = LINES.iter().map(Line::indices).collect();
        assert_eq!(
            triples,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_line_ends() {
        let column = LINES[4];
        assert!(column.starts_at(Position::TopCenter));
        assert!(column.ends_at(Position::BottomCenter));
        assert!(!column.ends_at(Position::Center));
        assert!(column.contains(Position::Center));
    }
}
