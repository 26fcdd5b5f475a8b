//! Terminal front end for tictactoe_timeline.
//!
//! # Architecture
//!
//! - **App**: owns the [`Timeline`](tictactoe_timeline::Timeline) and the
//!   keyboard cursor; applies [`Action`]s
//! - **Input**: turns key presses and mouse clicks into actions
//! - **UI**: draws the screen from the app and reports the layout used, so
//!   clicks can be hit-tested against what was drawn
//! - **Replay**: the same derived view, printed to stdout

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod runner;
pub mod ui;

pub use app::{Action, App};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use input::{Direction, event_action, key_action, mouse_action, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplaySummary, render_text, replay};
pub use runner::run_tui;
