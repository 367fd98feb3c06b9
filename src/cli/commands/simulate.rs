//! Simulate command - many games between two agents, tallied

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    agents::AgentKind,
    cli::output::{format_number, format_percent, print_section, print_stats_table},
    pipeline::{ProgressObserver, Simulation, SimulationConfig, SimulationResult},
};

#[derive(Parser, Debug)]
#[command(about = "Run a batch of games and tally the results")]
pub struct SimulateArgs {
    /// Number of games (default 1000)
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Agent playing X (default random)
    #[arg(long = "x", value_enum)]
    pub x_agent: Option<AgentKind>,

    /// Agent playing O (default genius)
    #[arg(long = "o", value_enum)]
    pub o_agent: Option<AgentKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let genius agents search the empty board instead of opening at random
    #[arg(long)]
    pub search_opening: bool,

    /// JSON file with a simulation config; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the result as JSON to this file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl SimulateArgs {
    /// Merge the optional config file with command-line overrides
    pub fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(kind) = self.x_agent {
            config.x_agent = kind;
        }
        if let Some(kind) = self.o_agent {
            config.o_agent = kind;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.search_opening {
            config.random_opening = false;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = args.resolve_config()?;

    print_section("Simulation");
    print_stats_table(&[
        ("Games", format_number(config.games)),
        ("X", config.x_agent.label().to_string()),
        ("O", config.o_agent.label().to_string()),
        (
            "Seed",
            config
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
        ),
    ]);

    let mut simulation = Simulation::new(config);
    if !args.no_progress {
        simulation = simulation.with_observer(Box::new(ProgressObserver::new()));
    }
    let result = simulation.run()?;

    report(&result);

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("exporting result to {}", path.display()))?;
        println!("\nResult exported to: {}", path.display());
    }

    Ok(())
}

fn report(result: &SimulationResult) {
    print_section("Results");
    print_stats_table(&[
        (
            "X wins",
            format!("{} ({})", result.x_wins, format_percent(result.x_win_rate)),
        ),
        (
            "O wins",
            format!("{} ({})", result.o_wins, format_percent(result.o_win_rate)),
        ),
        (
            "Ties",
            format!("{} ({})", result.ties, format_percent(result.tie_rate)),
        ),
    ]);
    println!("\n{}", result.summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = SimulateArgs::parse_from(["simulate", "--games", "12", "--x", "genius"]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.games, 12);
        assert_eq!(config.x_agent, AgentKind::Genius);
        assert_eq!(config.o_agent, AgentKind::Genius);
        assert!(config.random_opening);
    }

    #[test]
    fn zero_games_rejected() {
        let args = SimulateArgs::parse_from(["simulate", "--games", "0"]);
        assert!(args.resolve_config().is_err());
    }
}
