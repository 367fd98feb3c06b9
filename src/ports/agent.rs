//! Agent port - anything that can pick a cell for the side it plays
//!
//! Implementations:
//! - Random play (uniform over empty cells)
//! - Human input from a text stream
//! - Exhaustive minimax search

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Agent trait - unified interface for every kind of player
///
/// The game driver only asks agents for an index; legality is checked by
/// [`Board::apply_move`], so an agent proposing an occupied cell is simply
/// asked again.
///
/// # Examples
///
/// ```
/// use minimax_ttt::{
///     Result,
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// struct FirstFree(Player);
///
/// impl Agent for FirstFree {
///     fn letter(&self) -> Player {
///         self.0
///     }
///
///     fn select_move(&mut self, board: &Board) -> Result<usize> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(minimax_ttt::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut agent = FirstFree(Player::X);
/// assert_eq!(agent.select_move(&Board::new())?, 0);
/// # Ok::<(), minimax_ttt::Error>(())
/// ```
pub trait Agent {
    /// The letter this agent places on the board
    fn letter(&self) -> Player;

    /// Choose a cell (0-8) for the current board.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is full or
    /// an interactive input stream was closed.
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    /// Name used in logs and summaries
    fn name(&self) -> &str;
}
