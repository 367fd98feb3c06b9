//! Observer port - game and simulation events
//!
//! Observers let the driver report progress (console output, progress bars,
//! tallies) without knowing how that output is produced.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Move},
};

/// Observer trait for monitoring games
///
/// # Event Sequence
///
/// 1. `on_simulation_start(total_games)` - once, only for batch runs
/// 2. For each game:
///    - `on_game_start(game_num, board)`
///    - `on_move(game_num, mv, board)` after each accepted move
///    - `on_game_end(game_num, outcome)`
/// 3. `on_simulation_end()` - once, only for batch runs
///
/// Every hook defaults to doing nothing.
pub trait GameObserver {
    fn on_simulation_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called before the first move, with the starting board
    fn on_game_start(&mut self, _game_num: usize, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after `mv` has been applied; `board` is the updated state
    fn on_move(&mut self, _game_num: usize, _mv: Move, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl GameObserver for SilentObserver {}
