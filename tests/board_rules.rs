//! Board legality and win-detection rules

use minimax_ttt::tictactoe::{Board, Cell, LineAnalyzer, Player};

mod common;

mod legality {
    use super::*;

    #[test]
    fn apply_move_succeeds_iff_cell_empty() {
        for (board, player) in common::reachable_positions(40, 1) {
            for index in 0..9 {
                let mut trial = board;
                let was_empty = board.get(index) == Cell::Empty;

                assert_eq!(trial.apply_move(index, player), was_empty);
                if was_empty {
                    assert_eq!(trial.get(index), player.to_cell());
                } else {
                    assert_eq!(trial, board, "failed move must not mutate the board");
                }
            }
        }
    }

    #[test]
    fn occupied_cell_is_never_overwritten() {
        let mut board = Board::new();
        assert!(board.apply_move(0, Player::X));
        assert!(!board.apply_move(0, Player::O));
        assert!(!board.apply_move(0, Player::X));
        assert_eq!(board.get(0), Cell::X);
    }

    #[test]
    fn empty_square_helpers_agree() {
        for (board, _) in common::reachable_positions(20, 2) {
            let moves = board.available_moves();
            assert_eq!(moves.len(), board.count_empty_squares());
            assert_eq!(!moves.is_empty(), board.has_empty_square());
            assert!(moves.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

mod win_detection {
    use super::*;

    #[test]
    fn local_check_matches_full_scan() {
        for (board, player) in common::reachable_positions(60, 3) {
            for index in board.available_moves() {
                let mut trial = board;
                trial.apply_move(index, player);
                assert_eq!(
                    trial.current_winner() == Some(player),
                    LineAnalyzer::has_won(trial.cells(), player),
                    "board:\n{trial}"
                );
            }
        }
    }

    #[test]
    fn winner_survives_later_moves() {
        let mut board = Board::from_string("XX.OO....").unwrap();
        assert!(board.apply_move(2, Player::X));

        for (index, player) in [(5, Player::O), (6, Player::X), (7, Player::O)] {
            board.apply_move(index, player);
            assert!(board.current_winner().is_some());
        }
    }

    #[test]
    fn every_line_wins() {
        for line in minimax_ttt::tictactoe::WINNING_LINES {
            let mut board = Board::new();
            for &index in &line {
                assert!(board.apply_move(index, Player::O));
            }
            assert_eq!(board.current_winner(), Some(Player::O), "line {line:?}");
        }
    }
}
