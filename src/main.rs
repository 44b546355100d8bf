use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tomo::cli::args::{Cli, Commands};
use tomo::cli::commands;
use tomo::error::TomoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomoError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Run(args) => commands::run(args)?,
        Commands::Config(args) => commands::config(args.command, format)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
