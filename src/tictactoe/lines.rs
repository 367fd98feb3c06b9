//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::is_complete(cells, player, line))
    }

    /// Check whether every cell of `line` holds `player`'s piece
    pub fn is_complete(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> bool {
        let target = player.to_cell();
        line.iter().all(|&idx| cells[idx] == target)
    }

    /// Lines passing through `index`: its row, its column and, for even
    /// indices, both diagonals.
    ///
    /// Corners yield both diagonals too, even though only one passes through
    /// them.
    pub fn lines_through(index: usize) -> impl Iterator<Item = [usize; 3]> {
        let row = index / 3 * 3;
        let col = index % 3;
        let diagonals = if index.is_multiple_of(2) {
            [Some(MAIN_DIAGONAL), Some(ANTI_DIAGONAL)]
        } else {
            [None, None]
        };

        [[row, row + 1, row + 2], [col, col + 3, col + 6]]
            .into_iter()
            .chain(diagonals.into_iter().flatten())
    }
}
