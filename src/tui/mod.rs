//! Terminal User Interface (TUI) for the timer.
//!
//! Owns the cooperative event loop: it polls the keyboard and acts as
//! the clock's one-second tick source. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::Durations;
use crate::error::TomoError;

/// Everything needed to assemble a timer session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Durations from the config file.
    pub configured: Durations,
    /// One-off duration overrides from the command line. Applied by
    /// reconfiguring the clock after construction, which resets it.
    pub overrides: Option<Durations>,
    /// Endpoint session events are POSTed to, if any.
    pub endpoint: Option<String>,
    /// Whether natural completions raise a desktop notification.
    pub notifications: bool,
}

/// Run the timer application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(settings: &SessionSettings) -> Result<(), TomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TomoError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| TomoError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomoError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(settings);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TomoError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomoError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle(),
                event::Action::Reset => app.reset(),
                event::Action::Skip => app.skip(),
                event::Action::Help => app.show_help(),
            }
        }

        // Apply elapsed whole seconds, then surface any sink failures
        app.advance_clock();
        app.poll_reports();
    }

    Ok(())
}
