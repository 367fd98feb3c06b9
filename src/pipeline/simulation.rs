//! Batch simulation of many games between two agents

use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::game::play_game;
use crate::{
    Error, Result,
    agents::{AgentKind, AgentOptions},
    ports::{Agent, GameObserver},
    tictactoe::{Board, GameOutcome, Player},
};

/// Simulation configuration
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,

    /// Agent playing X (moves first)
    pub x_agent: AgentKind,

    /// Agent playing O
    pub o_agent: AgentKind,

    /// Random seed
    pub seed: Option<u64>,

    /// Whether genius agents open an empty board at random
    pub random_opening: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            x_agent: AgentKind::Random,
            o_agent: AgentKind::Genius,
            seed: None,
            random_opening: true,
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable simulation
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Total games played
    pub total_games: usize,

    /// Games won by X
    pub x_wins: usize,

    /// Games won by O
    pub o_wins: usize,

    /// Tied games
    pub ties: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub tie_rate: f64,
}

impl SimulationResult {
    /// Create a new simulation result
    pub fn new(x_wins: usize, o_wins: usize, ties: usize) -> Self {
        let total_games = x_wins + o_wins + ties;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            ties,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            tie_rate: rate(ties),
        }
    }

    /// One-line summary in plain words
    pub fn summary(&self) -> String {
        format!(
            "After {} simulations, we see {} X wins, {} O wins, and {} ties.",
            self.total_games, self.x_wins, self.o_wins, self.ties
        )
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Runs a batch of games and tallies the outcomes
pub struct Simulation {
    config: SimulationConfig,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Simulation {
    /// Create a new simulation
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build both agents from the configuration and play every game.
    ///
    /// With a seed, both agents' random streams are derived from it, so the
    /// whole run is reproducible.
    pub fn run(&mut self) -> Result<SimulationResult> {
        self.config.validate()?;

        let mut master = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut agent_for = |kind: AgentKind, letter: Player| {
            kind.build(
                letter,
                AgentOptions {
                    seed: Some(master.random()),
                    random_opening: self.config.random_opening,
                },
            )
        };
        let mut x_agent = agent_for(self.config.x_agent, Player::X);
        let mut o_agent = agent_for(self.config.o_agent, Player::O);

        self.run_with(x_agent.as_mut(), o_agent.as_mut())
    }

    /// Play every game with the given agents
    pub fn run_with(
        &mut self,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
    ) -> Result<SimulationResult> {
        let games = self.config.games;
        info!(games, x = x_agent.name(), o = o_agent.name(), "simulation started");
        self.observers.on_simulation_start(games)?;

        let (mut x_wins, mut o_wins, mut ties) = (0, 0, 0);
        for game_num in 0..games {
            let mut board = Board::new();
            let record = play_game(game_num, &mut board, x_agent, o_agent, &mut self.observers)?;
            match record.outcome {
                GameOutcome::Win(Player::X) => x_wins += 1,
                GameOutcome::Win(Player::O) => o_wins += 1,
                GameOutcome::Tie => ties += 1,
            }
        }

        self.observers.on_simulation_end()?;
        let result = SimulationResult::new(x_wins, o_wins, ties);
        info!(x_wins, o_wins, ties, "simulation finished");
        Ok(result)
    }
}
