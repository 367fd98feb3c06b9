//! Agent implementations: random, human and genius (minimax) players

pub mod genius;
pub mod human;
pub mod random;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use genius::GeniusAgent;
pub use human::HumanAgent;
pub use random::RandomAgent;

use crate::{ports::Agent, tictactoe::Player};

/// Kind of agent controlling one side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Uniformly random legal moves
    Random,
    /// Moves typed on standard input
    Human,
    /// Exhaustive minimax search
    Genius,
}

impl AgentKind {
    /// Get short label
    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Human => "human",
            AgentKind::Genius => "genius",
        }
    }

    /// Build a boxed agent playing `letter`.
    ///
    /// Human agents read from standard input and ignore `options`.
    pub fn build(self, letter: Player, options: AgentOptions) -> Box<dyn Agent> {
        let seed = options.seed.unwrap_or_else(rand::random);
        match self {
            AgentKind::Random => Box::new(RandomAgent::with_seed(letter, seed)),
            AgentKind::Human => Box::new(HumanAgent::stdio(letter)),
            AgentKind::Genius => Box::new(
                GeniusAgent::with_seed(letter, seed).with_random_opening(options.random_opening),
            ),
        }
    }
}

/// Settings shared by the non-interactive agents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentOptions {
    /// Seed for the agent's random choices; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Whether genius agents open an empty board at random
    pub random_opening: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            seed: None,
            random_opening: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_assigns_letter_and_name() {
        let options = AgentOptions {
            seed: Some(7),
            ..AgentOptions::default()
        };
        let agent = AgentKind::Genius.build(Player::O, options);
        assert_eq!(agent.letter(), Player::O);
        assert_eq!(agent.name(), "Genius O");

        let agent = AgentKind::Random.build(Player::X, AgentOptions::default());
        assert_eq!(agent.letter(), Player::X);
        assert_eq!(agent.name(), "Random X");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&AgentKind::Genius).unwrap();
        assert_eq!(json, "\"genius\"");
        let parsed: AgentKind = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(parsed, AgentKind::Random);
    }
}
