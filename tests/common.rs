//! Common test utilities for the minimax-ttt test suite.
//!
//! Positions are generated by seeded random play so every test sees the same
//! boards on every run.

use minimax_ttt::tictactoe::{Board, Player};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Collect non-terminal positions reached by random games, paired with the
/// side to move.
///
/// # Arguments
///
/// * `games` - Number of random games to play
/// * `seed` - Seed for the move choices
pub fn reachable_positions(games: usize, seed: u64) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();

    for _ in 0..games {
        let mut board = Board::new();
        let mut to_move = Player::X;
        while !board.is_terminal() {
            positions.push((board, to_move));
            let square = *board
                .available_moves()
                .choose(&mut rng)
                .expect("non-terminal board has a move");
            assert!(board.apply_move(square, to_move));
            to_move = to_move.opponent();
        }
    }

    positions
}
