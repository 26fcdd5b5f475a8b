//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here looks at
//! history or the current index; the timeline composes these rules.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, Line, LineKind};
pub use win::{winner, winning_line};
