//! Config command implementation.

use chrono::Duration;
use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::format_duration;
use crate::error::TomoError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, TomoError> {
    match cmd {
        ConfigCommands::Show => show(format),
        ConfigCommands::Set {
            work,
            short_break,
            long_break,
            endpoint,
            clear_endpoint,
            notifications,
        } => set(
            work,
            short_break,
            long_break,
            endpoint,
            clear_endpoint,
            notifications,
            format,
        ),
    }
}

/// Show the active configuration.
fn show(format: OutputFormat) -> Result<String, TomoError> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("Timer".bold().to_string());
            output.push(format!(
                "  Work:        {}",
                minutes(config.timer.work_minutes)
            ));
            output.push(format!(
                "  Short break: {}",
                minutes(config.timer.short_break_minutes)
            ));
            output.push(format!(
                "  Long break:  {}",
                minutes(config.timer.long_break_minutes)
            ));
            output.push(String::new());

            output.push("Session log".bold().to_string());
            match config.log.endpoint {
                Some(ref endpoint) => output.push(format!("  Endpoint: {endpoint}")),
                None => output.push(format!("  Endpoint: {}", "not set".dimmed())),
            }
            output.push(String::new());

            output.push("Notifications".bold().to_string());
            output.push(format!(
                "  Enabled: {}",
                if config.notifications.enabled {
                    "yes"
                } else {
                    "no"
                }
            ));

            Ok(output.join("\n"))
        }
    }
}

/// Update and persist configuration values.
fn set(
    work: Option<u32>,
    short_break: Option<u32>,
    long_break: Option<u32>,
    endpoint: Option<String>,
    clear_endpoint: bool,
    notifications: Option<bool>,
    format: OutputFormat,
) -> Result<String, TomoError> {
    let mut config = Config::load()?;

    if let Some(minutes) = work {
        config.timer.work_minutes = minutes;
    }
    if let Some(minutes) = short_break {
        config.timer.short_break_minutes = minutes;
    }
    if let Some(minutes) = long_break {
        config.timer.long_break_minutes = minutes;
    }

    if clear_endpoint {
        config.log.endpoint = None;
    } else if let Some(url) = endpoint {
        config.log.endpoint = Some(url);
    }

    if let Some(enabled) = notifications {
        config.notifications.enabled = enabled;
    }

    config.save()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let paths = Paths::new()?;
            Ok(format!(
                "{} Configuration saved to {}\n   {}",
                "✓".green(),
                paths.config_file.display(),
                "Use 'tomo config show' to review".dimmed()
            ))
        }
    }
}

/// Format a minute count for display.
fn minutes(count: u32) -> String {
    format_duration(Duration::minutes(i64::from(count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_formatting() {
        assert_eq!(minutes(25), "25 minutes");
        assert_eq!(minutes(90), "1 hour, 30 minutes");
    }
}
