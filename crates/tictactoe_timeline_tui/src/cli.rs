//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_timeline::Position;

/// Tic-tac-toe with a clickable, time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./tictactoe_timeline.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file for the terminal UI (overrides the settings file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// List moves latest first
        #[arg(long)]
        descending: bool,
    },

    /// Play a list of cells and print the result
    Replay {
        /// Cells to play, in order: 0-8 row-major, or labels like `center`
        #[arg(value_parser = parse_cell)]
        cells: Vec<Position>,

        /// Move number to display after playing
        #[arg(long)]
        jump: Option<usize>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_cell(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("`{}` is not a cell (0-8 or a label like `top-left`)", s))
}

impl Cli {
    /// The chosen command, `play` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { descending: false })
    }
}
