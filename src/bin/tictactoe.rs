//! Tic-Tac-Toe CLI - Query the rules engine and the minimax search
//!
//! This CLI provides:
//! - The optimal action for a position
//! - The exact value of every legal action
//! - Engine self-play from any position

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_minimax::cli::{self, commands};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Optimal Tic-Tac-Toe play via minimax search", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal action for a position
    BestMove(commands::best_move::BestMoveArgs),

    /// Show the exact value of every legal action
    Analyze(commands::analyze::AnalyzeArgs),

    /// Play the engine against itself
    Selfplay(commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args),
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::Selfplay(args) => commands::selfplay::execute(args),
    }
}
