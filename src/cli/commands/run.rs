//! Run command implementation.
//!
//! Composition root for a timer session: loads configuration, applies
//! command-line overrides, and hands the result to the TUI.

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::core::Durations;
use crate::error::TomoError;
use crate::tui::{self, SessionSettings};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the TUI fails
/// to initialize.
pub fn run(args: RunArgs) -> Result<String, TomoError> {
    let config = Config::load()?;
    let settings = session_settings(&config, &args);

    tui::run(&settings)?;

    Ok(String::new())
}

/// Combine the config file with command-line duration overrides.
fn session_settings(config: &Config, args: &RunArgs) -> SessionSettings {
    let timer = &config.timer;

    let overrides = if args.work.is_some() || args.short_break.is_some() || args.long_break.is_some()
    {
        Some(Durations::from_minutes(
            args.work.unwrap_or(timer.work_minutes),
            args.short_break.unwrap_or(timer.short_break_minutes),
            args.long_break.unwrap_or(timer.long_break_minutes),
        ))
    } else {
        None
    };

    SessionSettings {
        configured: timer.durations(),
        overrides,
        endpoint: config.log.endpoint.clone(),
        notifications: config.notifications.enabled,
    }
}
