mod badges;
mod cli;
mod config;
mod engine;
mod error;
mod render;
mod state;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "streak")]
#[command(about = "Track a daily habit streak from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's check-in (the default action)
    Checkin,
    /// Show current and longest streak with the weekly strip
    Status,
    /// Show only the weekly strip
    Week,
    /// List every check-in date
    History,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Checkin) {
        Commands::Checkin => cli::checkin::run(),
        Commands::Status => cli::status::run(),
        Commands::Week => cli::week::run(),
        Commands::History => cli::history::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
