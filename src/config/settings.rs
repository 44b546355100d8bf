//! Configuration settings for tomo.
//!
//! Settings are loaded from `~/.tomo/config.yaml`. The timer core only
//! ever sees durations that passed validation here.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::Durations;
use crate::error::TomoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Timer durations.
    pub timer: TimerConfig,
    /// Session event logging.
    pub log: LogConfig,
    /// Desktop notification settings.
    pub notifications: NotificationConfig,
}

/// Timer durations in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
}

/// Session event logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Endpoint completed and skipped sessions are POSTed to.
    /// Logging is off when unset.
    pub endpoint: Option<String>,
}

/// Desktop notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Raise a desktop notification when a session completes.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_short_break_minutes() -> u32 {
    5
}

const fn default_long_break_minutes() -> u32 {
    15
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl TimerConfig {
    /// Check that every duration is a positive number of minutes.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field.
    pub fn validate(&self) -> Result<(), TomoError> {
        let fields = [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ];

        for (name, minutes) in fields {
            if minutes == 0 {
                return Err(TomoError::Config(format!(
                    "{name} must be a positive number of minutes"
                )));
            }
        }

        Ok(())
    }

    /// Convert to phase durations in seconds.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        Durations::from_minutes(
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed
    /// or contains non-positive durations.
    pub fn load() -> Result<Self, TomoError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed
    /// or contains non-positive durations.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.timer.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TomoError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.timer.long_break_minutes, 15);
        assert!(config.log.endpoint.is_none());
        assert!(config.notifications.enabled);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.work_minutes, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.work_minutes = 50;
        config.log.endpoint = Some("http://localhost:5000/log".to_string());

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.work_minutes, 50);
        assert_eq!(
            loaded.log.endpoint.as_deref(),
            Some("http://localhost:5000/log")
        );
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  work_minutes: 45
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.timer.work_minutes, 45);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.short_break_minutes, 5);
        assert!(config.notifications.enabled);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "timer:\n  short_break_minutes: 0\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(TomoError::Config(_))));
    }

    #[test]
    fn test_timer_config_durations() {
        let timer = TimerConfig::default();
        let durations = timer.durations();

        assert_eq!(durations.work_seconds, 25 * 60);
        assert_eq!(durations.short_break_seconds, 5 * 60);
        assert_eq!(durations.long_break_seconds, 15 * 60);
    }
}
