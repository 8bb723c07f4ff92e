//! Full-screen fuzzy picker backing the core `Selector` trait.

use crate::app::App;
use crate::{handlers, ui};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gh_token_core::Selector;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

/// Interactive picker drawn on the alternate screen.
#[derive(Debug, Default)]
pub struct FuzzyPicker;

impl Selector for FuzzyPicker {
    fn select(&mut self, candidates: &[String]) -> Result<Option<String>> {
        let mut app = App::new(candidates.to_vec());

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let result = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| {
                let result = run_app(&mut terminal, &mut app);
                terminal.show_cursor()?;
                result
            });

        let restored = restore_terminal(disable_raw_mode, || {
            execute!(io::stdout(), LeaveAlternateScreen)
        });

        result?;
        restored?;
        Ok(app.into_selection())
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handlers::handle_key(app, key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Run both restore steps even if the first fails; report the first error.
fn restore_terminal(
    disable_raw: impl FnOnce() -> io::Result<()>,
    leave_screen: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = leave_screen();
    raw.and(screen)
}
