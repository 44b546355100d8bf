//! Event handling for the timer UI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TomoError;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Reset the current phase.
    Reset,
    /// Skip to the next phase.
    Skip,
    /// Show the key help line.
    Help,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Polling
/// with a short timeout keeps the loop ticking the clock at a steady
/// cadence even when no keys arrive.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, TomoError> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TomoError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| TomoError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Start / pause
                KeyCode::Char(' ') | KeyCode::Enter => return Ok(Some(Action::Toggle)),

                // Phase controls
                KeyCode::Char('r') => return Ok(Some(Action::Reset)),
                KeyCode::Char('s') => return Ok(Some(Action::Skip)),

                // Help
                KeyCode::Char('?') => return Ok(Some(Action::Help)),

                _ => {}
            }
        }
    }

    Ok(None)
}
