use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomo")]
#[command(about = "A Pomodoro session timer for the terminal")]
#[command(long_about = "tomo - a Pomodoro session timer for the terminal

Cycles four timed work sessions, each followed by a short break, and
closes every cycle with a long break. Completed and skipped sessions
can be posted as JSON to an HTTP endpoint, and natural completions
raise a desktop notification.

QUICK START:
  tomo run                  Start the timer with your configured durations
  tomo run --work 50        One-off 50-minute work sessions
  tomo config show          Show the active configuration
  tomo config set --work 30 Persist a 30-minute work duration

KEYS (inside the timer):
  Space   start / pause         r   reset the current phase
  s       skip to next phase    q   quit

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer
    ///
    /// Starts the timer at the first work session, idle. Durations
    /// come from the config file; the flags below override them for
    /// this run only.
    ///
    /// # Examples
    ///
    ///   tomo run
    ///   tomo run --work 50
    ///   tomo run --work 90 --long-break 30
    #[command(alias = "r")]
    Run(RunArgs),

    /// View or change configuration
    ///
    /// Settings live in ~/.tomo/config.yaml: timer durations, the
    /// session log endpoint, and desktop notifications.
    ///
    /// # Examples
    ///
    ///   tomo config show
    ///   tomo config show -o json
    ///   tomo config set --work 30 --short-break 10
    ///   tomo config set --endpoint http://localhost:5000/log
    #[command(alias = "c")]
    Config(ConfigArgs),
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Work session length in minutes (overrides the config file)
    #[arg(long, short = 'w', value_parser = clap::value_parser!(u32).range(1..))]
    pub work: Option<u32>,

    /// Short break length in minutes (overrides the config file)
    #[arg(long, short = 's', value_parser = clap::value_parser!(u32).range(1..))]
    pub short_break: Option<u32>,

    /// Long break length in minutes (overrides the config file)
    #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(1..))]
    pub long_break: Option<u32>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,

    /// Update and persist configuration values
    ///
    /// Only the given values change; everything else keeps its
    /// current setting.
    Set {
        /// Work session length in minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        work: Option<u32>,

        /// Short break length in minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        short_break: Option<u32>,

        /// Long break length in minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        long_break: Option<u32>,

        /// Endpoint completed and skipped sessions are POSTed to
        #[arg(long)]
        endpoint: Option<String>,

        /// Clear the configured endpoint
        #[arg(long, conflicts_with = "endpoint")]
        clear_endpoint: bool,

        /// Enable or disable desktop notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_run() {
        let cli = Cli::try_parse_from(["tomo", "run"]).unwrap();
        if let Commands::Run(args) = cli.command {
            assert!(args.work.is_none());
            assert!(args.short_break.is_none());
            assert!(args.long_break.is_none());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_with_overrides() {
        let cli = Cli::try_parse_from(["tomo", "run", "--work", "50", "-s", "10"]).unwrap();
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.work, Some(50));
            assert_eq!(args.short_break, Some(10));
            assert!(args.long_break.is_none());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_rejects_zero_duration() {
        assert!(Cli::try_parse_from(["tomo", "run", "--work", "0"]).is_err());
    }

    #[test]
    fn test_cli_run_rejects_non_numeric_duration() {
        assert!(Cli::try_parse_from(["tomo", "run", "--work", "soon"]).is_err());
    }

    #[test]
    fn test_cli_config_show() {
        let cli = Cli::try_parse_from(["tomo", "config", "show"]).unwrap();
        if let Commands::Config(args) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Show));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_config_set() {
        let cli =
            Cli::try_parse_from(["tomo", "config", "set", "--work", "30", "--notifications", "false"])
                .unwrap();
        if let Commands::Config(args) = cli.command {
            if let ConfigCommands::Set {
                work,
                notifications,
                ..
            } = args.command
            {
                assert_eq!(work, Some(30));
                assert_eq!(notifications, Some(false));
            } else {
                panic!("Expected Set subcommand");
            }
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_config_set_endpoint_conflicts_with_clear() {
        assert!(Cli::try_parse_from([
            "tomo",
            "config",
            "set",
            "--endpoint",
            "http://localhost:5000/log",
            "--clear-endpoint",
        ])
        .is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
