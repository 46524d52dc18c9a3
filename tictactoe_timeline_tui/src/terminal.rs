//! Terminal setup and the interactive event loop.

use crate::app::{App, Control};
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(moves = app.game().history_length() - 1, "Terminal UI closed");
    res
}

fn run_app(terminal: &mut Term, app: &mut App, config: &TuiConfig) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, config))?;

        // Blocks until the next event; nothing changes between key presses.
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
