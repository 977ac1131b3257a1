pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe",
    about = "Wardrobe outfit suggestion CLI",
    long_about = "Suggest outfits from a clothing inventory, inspect effective config, and run readiness checks.",
    after_help = "Examples:\n  wardrobe suggest --inventory closet.json --occasion business\n  wardrobe config\n  wardrobe doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Suggest outfits from a JSON inventory file")]
    Suggest {
        #[arg(long, help = "Path to a JSON array of clothing items")]
        inventory: PathBuf,
        #[arg(long, help = "Occasion such as casual, business, formal or sport")]
        occasion: Option<String>,
        #[arg(long, help = "Season filter: spring, summer, autumn, winter or all_season")]
        season: Option<String>,
        #[arg(long = "color", help = "Preferred color fragment, matched case-sensitively")]
        color_preference: Option<String>,
        #[arg(long, help = "Seed for reproducible outerwear choices")]
        seed: Option<u64>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and style guide readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Suggest { inventory, occasion, season, color_preference, seed, json } => {
            commands::suggest::run(commands::suggest::SuggestArgs {
                inventory,
                occasion,
                season,
                color_preference,
                seed,
                json,
            })
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
