//! ttt - Tic-Tac-Toe against random, human and minimax agents
//!
//! This CLI provides:
//! - Interactive or automated single games
//! - Batch simulations with win/loss/tie tallies
//! - Optimal-move analysis for arbitrary positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe with an exhaustive minimax agent", long_about = None)]
struct Cli {
    /// Log search and simulation details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(minimax_ttt::cli::commands::play::PlayArgs),

    /// Run many games and tally the results
    Simulate(minimax_ttt::cli::commands::simulate::SimulateArgs),

    /// Find the optimal move for a position
    Solve(minimax_ttt::cli::commands::solve::SolveArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => minimax_ttt::cli::commands::play::execute(args),
        Commands::Simulate(args) => minimax_ttt::cli::commands::simulate::execute(args),
        Commands::Solve(args) => minimax_ttt::cli::commands::solve::execute(args),
    }
}
