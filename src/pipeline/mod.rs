//! Game driving and batch simulation
//!
//! This module provides:
//! - The turn-by-turn game driver
//! - Batch simulation with caller-owned tallies
//! - Observers for console narration and progress bars

pub mod game;
pub mod observers;
pub mod simulation;

pub use game::{MAX_REJECTED_MOVES, play_game};
pub use observers::{ConsoleObserver, ProgressObserver};
pub use simulation::{Simulation, SimulationConfig, SimulationResult};

pub use crate::ports::{Agent, GameObserver};
