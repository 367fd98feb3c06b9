//! Tic-Tac-Toe with an exhaustive minimax agent
//!
//! This crate provides:
//! - A 3x3 board with move legality and localized win detection
//! - A minimax search engine that finds provably optimal moves
//! - Random, human and genius (minimax) agents behind one trait
//! - A game driver, batch simulation and CLI commands built on top

pub mod agents;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchEngine, SearchResult};
pub use tictactoe::{Board, Cell, GameOutcome, Player};
