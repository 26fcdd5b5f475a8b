//! Terminal setup and the blocking event loop.

use crate::app::App;
use crate::input::event_action;
use crate::ui::{self, ScreenLayout};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_timeline::MoveOrder;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was found.
fn restore(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the interactive game until the user quits.
#[instrument]
pub fn run_tui(order: MoveOrder) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(e).context("Failed to create terminal");
        }
    };

    let res = run_game(&mut terminal, App::new(order));
    let restored = restore(&mut terminal);

    settle(res, restored)
}

/// Merges the game result with the terminal restore result.
///
/// A game loop error wins over a restore error; both are logged.
fn settle(game: Result<()>, restored: Result<()>) -> Result<()> {
    match (game, restored) {
        (Err(err), restored) => {
            error!(error = ?err, "Game loop error");
            if let Err(restore_err) = restored {
                error!(error = ?restore_err, "Failed to restore terminal");
            }
            Err(err)
        }
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

/// Draw, wait for one event, apply it, repeat.
fn run_game(terminal: &mut Term, mut app: App) -> Result<()> {
    let mut layout = ScreenLayout::default();

    while !app.should_quit() {
        terminal.draw(|frame| layout = ui::draw(frame, &app))?;

        let event = event::read()?;
        let entries = app.timeline().move_entries();
        if let Some(action) = event_action(&event, &layout, &entries) {
            app.apply(action);
        }
    }

    info!(moves = app.timeline().last_index(), "Game loop finished");
    Ok(())
}
