//! Agent that plays uniformly at random

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Agent that picks uniformly among the empty cells
pub struct RandomAgent {
    letter: Player,
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(letter: Player) -> Self {
        Self::with_seed(letter, rand::random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(letter: Player, seed: u64) -> Self {
        Self {
            letter,
            name: format!("Random {letter}"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn letter(&self) -> Player {
        self.letter
    }

    fn select_move(&mut self, board: &Board) -> Result<usize> {
        board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
