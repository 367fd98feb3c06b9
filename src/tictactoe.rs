//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game::{GameOutcome, GameRecord, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
