//! Exhaustive minimax search over a single mutable board

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// Best move found by the search together with its score.
///
/// `position` is `None` only for terminal leaves, which never escape
/// [`SearchEngine::best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub position: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Minimax engine scoring positions for a fixed maximizing player.
///
/// Scores are zero-sum: a win for the maximizing player is worth
/// `empty_cells + 1` at the moment of the win, a loss the negation, a tie 0.
/// Faster wins therefore outrank slower ones and slower losses outrank faster
/// ones.
///
/// The search plays and undoes moves on the caller's board; the `&mut`
/// borrow keeps anyone else off that board while a search runs.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    maximizing_player: Player,
}

impl SearchEngine {
    pub fn new(maximizing_player: Player) -> Self {
        Self { maximizing_player }
    }

    pub fn maximizing_player(&self) -> Player {
        self.maximizing_player
    }

    /// Find the optimal move for `acting_player` on `board`.
    ///
    /// Every legal continuation is explored; among equally scored moves the
    /// lowest index wins. The board is identical to its input state when this
    /// returns.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the board already has a winner
    /// - [`Error::NoValidMoves`] if the board is full
    pub fn best_move(&self, board: &mut Board, acting_player: Player) -> Result<SearchResult> {
        if let Some(winner) = board.current_winner() {
            return Err(Error::GameOver { winner });
        }
        if !board.has_empty_square() {
            return Err(Error::NoValidMoves);
        }

        let mut nodes = 0u64;
        let result = self.minimax(board, acting_player, &mut nodes);
        debug!(
            maximizing = %self.maximizing_player,
            acting = %acting_player,
            position = ?result.position,
            score = result.score,
            nodes,
            "search complete"
        );
        Ok(result)
    }

    fn minimax(&self, board: &mut Board, acting: Player, nodes: &mut u64) -> SearchResult {
        *nodes += 1;
        let previous = acting.opponent();

        if board.current_winner() == Some(previous) {
            let magnitude = board.count_empty_squares() as i32 + 1;
            return SearchResult::leaf(if previous == self.maximizing_player {
                magnitude
            } else {
                -magnitude
            });
        }
        if !board.has_empty_square() {
            return SearchResult::leaf(0);
        }

        let maximizing = acting == self.maximizing_player;
        let mut best = SearchResult::leaf(if maximizing { i32::MIN } else { i32::MAX });

        for position in board.available_moves() {
            board.apply_move(position, acting);
            let score = self.minimax(board, acting.opponent(), nodes).score;
            board.undo_move(position);

            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult {
                    position: Some(position),
                    score,
                };
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_immediate_win_scores_remaining_empties() {
        let mut board = board_from("XX.OO....");
        let engine = SearchEngine::new(Player::X);

        let result = engine.best_move(&mut board, Player::X).unwrap();
        assert_eq!(result.position, Some(2));
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_last_square_tie() {
        // X O X / X O O / O X _ : X fills the last square without a line
        let mut board = board_from("XOXXOOOX.");
        let engine = SearchEngine::new(Player::X);

        let result = engine.best_move(&mut board, Player::X).unwrap();
        assert_eq!(result, SearchResult { position: Some(8), score: 0 });
    }

    #[test]
    fn test_minimizing_turn_uses_opponent_view() {
        // O to move but the engine maximizes for X: O takes its own win
        let mut board = board_from("XX.OO.X..");
        let engine = SearchEngine::new(Player::X);

        let result = engine.best_move(&mut board, Player::O).unwrap();
        assert_eq!(result.position, Some(5));
        assert_eq!(result.score, -4);
    }

    #[test]
    fn test_rejects_won_board() {
        let mut board = board_from("XXXOO....");
        let engine = SearchEngine::new(Player::O);

        let err = engine.best_move(&mut board, Player::O).unwrap_err();
        assert!(matches!(err, Error::GameOver { winner: Player::X }));
    }

    #[test]
    fn test_rejects_full_board() {
        let mut board = board_from("XOXXOOOXX");
        let engine = SearchEngine::new(Player::X);

        assert!(matches!(
            engine.best_move(&mut board, Player::X),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = board_from("X...O....");
        let before = board;
        SearchEngine::new(Player::X)
            .best_move(&mut board, Player::X)
            .unwrap();
        assert_eq!(board, before);
    }
}
