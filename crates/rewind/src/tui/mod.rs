//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for_key, move_selector};
pub use ui::draw;

use crate::config::Palette;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(cursor = app.game().cursor()))]
pub fn run(app: App, palette: Palette) -> Result<()> {
    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &palette);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    palette: &Palette,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, palette))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for_key(key.code)
        {
            app.handle(action);
        }

        if app.should_quit() {
            info!(len = app.game().len(), cursor = app.game().cursor(), "User quit");
            return Ok(());
        }
    }
}
