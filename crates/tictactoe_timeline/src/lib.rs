//! Tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: immutable [`Board`] snapshots of nine [`Square`]s
//! - **Rules**: pure evaluators over a single snapshot ([`rules`])
//! - **Timeline**: the state container holding every snapshot and the
//!   index of the one on display
//! - **View**: status, highlighted line and move list derived from the
//!   timeline on demand
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameStatus, Player, Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! for cell in [0, 4, 1, 8, 2] {
//!     timeline.play(Position::from_index(cell).unwrap());
//! }
//! assert_eq!(timeline.status().winner(), Some(Player::X));
//!
//! // Going back in time clears the win and hands the turn back.
//! timeline.jump_to(4);
//! assert_eq!(timeline.status(), GameStatus::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod order;
mod position;
pub mod rules;
mod timeline;
mod types;
mod view;

pub use error::MoveError;
pub use order::MoveOrder;
pub use position::Position;
pub use rules::{Line, LineKind};
pub use timeline::Timeline;
pub use types::{Board, Player, Square};
pub use view::{GameStatus, MoveEntry};
