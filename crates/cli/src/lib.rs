pub mod commands;
mod logging;

use clap::{Parser, Subcommand};
use larder_core::config::{AppConfig, LoadOptions};
use std::process::ExitCode;

use commands::suggest::SuggestArgs;

#[derive(Debug, Parser)]
#[command(
    name = "larder",
    about = "Larder pantry CLI",
    long_about = "Suggest recipes that can be cooked from the current pantry and inspect configuration.",
    after_help = "Examples:\n  larder suggest\n  larder suggest --min-matching 3 --limit 5\n  larder config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank recipes by how many of their ingredients are in the pantry")]
    Suggest(SuggestArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Commands report config problems themselves; logging just stays off.
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        if let Err(error) = logging::init_logging(&config) {
            eprintln!("{error}");
        }
    }

    let result = match cli.command {
        Command::Suggest(args) => commands::suggest::run(args),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
