//! Optimal agent backed by the minimax search engine

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    ports::Agent,
    search::SearchEngine,
    tictactoe::{Board, Player},
};

/// Agent that always plays a minimax-optimal move.
///
/// On an empty board the full search is skipped by default and a random cell
/// is chosen instead: every opening is a draw under optimal play, and the
/// empty-board search is by far the most expensive one.
pub struct GeniusAgent {
    name: String,
    engine: SearchEngine,
    random_opening: bool,
    rng: StdRng,
}

impl GeniusAgent {
    pub fn new(letter: Player) -> Self {
        Self::with_seed(letter, rand::random())
    }

    /// Create a genius agent whose random opening is reproducible
    pub fn with_seed(letter: Player, seed: u64) -> Self {
        Self {
            name: format!("Genius {letter}"),
            engine: SearchEngine::new(letter),
            random_opening: true,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Search the empty board too instead of opening at random
    pub fn with_random_opening(mut self, enabled: bool) -> Self {
        self.random_opening = enabled;
        self
    }
}

impl Agent for GeniusAgent {
    fn letter(&self) -> Player {
        self.engine.maximizing_player()
    }

    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let available = board.available_moves();
        if self.random_opening && available.len() == 9 {
            return available
                .choose(&mut self.rng)
                .copied()
                .ok_or(Error::NoValidMoves);
        }

        let mut scratch = *board;
        let result = self.engine.best_move(&mut scratch, self.letter())?;
        result.position.ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
