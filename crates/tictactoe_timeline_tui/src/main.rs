//! Tic-tac-toe with time travel - CLI entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_timeline::MoveOrder;
use tictactoe_timeline_tui::{
    Cli, Command, ReplaySummary, Settings, init_file_logging, init_stderr_logging, render_text,
    replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // No subscriber exists yet, so events from loading are dropped; the
    // resolved settings are logged once logging is initialized below.
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = cli.log_file.clone() {
        settings = settings.with_log_file(path);
    }

    match cli.resolved_command() {
        Command::Play { descending } => {
            if descending {
                settings = settings.with_initial_order(MoveOrder::Descending);
            }
            init_file_logging(settings.log_file(), settings.log_filter())?;
            info!(config = ?cli.config, ?settings, "Settings resolved");
            run_tui(*settings.initial_order())
        }
        Command::Replay {
            cells,
            jump,
            descending,
            json,
        } => {
            init_stderr_logging(settings.log_filter());
            info!(config = ?cli.config, ?settings, "Settings resolved");
            let order = if descending {
                MoveOrder::Descending
            } else {
                *settings.initial_order()
            };
            let timeline = replay(&cells, jump, order)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ReplaySummary::from(&timeline))?
                );
            } else {
                print!("{}", render_text(&timeline));
            }
            Ok(())
        }
    }
}
