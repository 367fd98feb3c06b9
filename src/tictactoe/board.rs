//! Board state representation and basic operations

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn letter(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single 3x3 game state.
///
/// Cells only change through [`Board::apply_move`], which refuses occupied
/// squares, and [`Board::undo_move`], which the search engine uses to roll
/// back its own exploratory moves. `current_winner` is recorded by
/// `apply_move` and cleared only by `undo_move`.
///
/// The type is `Copy` (10 bytes), so agents that need a scratch board simply
/// copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    current_winner: Option<Player>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            current_winner: None,
        }
    }

    /// Create a board from a string of 9 cells.
    ///
    /// Two layouts are accepted. The compact form lists the cells in order,
    /// with whitespace ignored, e.g. `"XX.OO...."` or `"XX. OO. ..."`. The
    /// grid form is what [`Board`]'s `Display` produces: cells separated by
    /// `|`, one row per line, where a blank slot is an empty cell. `.`, `-`
    /// and `_` also mark empty cells. The winner is recomputed by scanning
    /// every line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The input does not describe exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - Both players have three in a row
    /// - The piece counts cannot arise from X moving first
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let symbols: Vec<char> = if s.contains('|') {
            Self::grid_symbols(s)
        } else {
            s.chars().filter(|c| !c.is_whitespace()).collect()
        };

        if symbols.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: symbols.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in symbols.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_wins = LineAnalyzer::has_won(&cells, Player::X);
        let o_wins = LineAnalyzer::has_won(&cells, Player::O);
        let current_winner = match (x_wins, o_wins) {
            (true, true) => {
                return Err(crate::Error::ConflictingWinners {
                    context: s.to_string(),
                });
            }
            (true, false) => Some(Player::X),
            (false, true) => Some(Player::O),
            (false, false) => None,
        };

        let board = Board {
            cells,
            current_winner,
        };
        board.player_to_move()?;
        Ok(board)
    }

    /// Cell symbols of a `|`-separated grid; a blank slot becomes `.`
    fn grid_symbols(s: &str) -> Vec<char> {
        s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .flat_map(|line| {
                let inner = line.strip_prefix('|').unwrap_or(line);
                let inner = inner.strip_suffix('|').unwrap_or(inner);
                inner.split('|').map(str::trim).collect::<Vec<_>>()
            })
            .flat_map(|slot| {
                if slot.is_empty() {
                    vec!['.']
                } else {
                    slot.chars().filter(|c| !c.is_whitespace()).collect()
                }
            })
            .collect()
    }

    /// Number of X and O pieces on the board
    pub fn count_pieces(&self) -> (usize, usize) {
        let count = |cell: Cell| self.cells.iter().filter(|&&c| c == cell).count();
        (count(Cell::X), count(Cell::O))
    }

    /// The player whose turn it is, derived from the piece counts.
    ///
    /// X moves first, so X is to move when the counts are equal and O when X
    /// is one piece ahead.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] for any other difference.
    pub fn player_to_move(&self) -> Result<Player, crate::Error> {
        let (x_count, o_count) = self.count_pieces();
        if x_count == o_count {
            Ok(Player::X)
        } else if x_count == o_count + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts { x_count, o_count })
        }
    }

    /// The cells in index order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// The player whose last move completed three in a row, if any
    pub fn current_winner(&self) -> Option<Player> {
        self.current_winner
    }

    /// All empty positions in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_empty_square(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    pub fn count_empty_squares(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Place `player`'s piece at `index`.
    ///
    /// Returns `false` without touching the board when `index` is out of
    /// range or the cell is occupied. On success the winner is re-evaluated
    /// from the lines through `index`; an already recorded winner is never
    /// cleared here.
    pub fn apply_move(&mut self, index: usize, player: Player) -> bool {
        if index >= 9 || self.cells[index] != Cell::Empty {
            trace!(index, %player, "rejected move");
            return false;
        }

        self.cells[index] = player.to_cell();
        if self.check_winner(index, player) {
            self.current_winner = Some(player);
        }
        true
    }

    /// Check whether the move at `index` by `player` completed a line.
    ///
    /// Only the row, the column and, for even indices, the diagonals through
    /// `index` are inspected.
    pub fn check_winner(&self, index: usize, player: Player) -> bool {
        LineAnalyzer::lines_through(index)
            .any(|line| LineAnalyzer::is_complete(&self.cells, player, &line))
    }

    /// Reset `index` to empty and clear the recorded winner.
    ///
    /// Only meaningful as the inverse of a successful [`Board::apply_move`]
    /// on a board that had no winner before that move.
    pub fn undo_move(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
        self.current_winner = None;
    }

    /// Whether the game on this board has ended (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.current_winner.is_some() || !self.has_empty_square()
    }

    /// Render the numbered cell legend shown to human players
    pub fn legend() -> String {
        (0..3)
            .map(|row| {
                let labels: Vec<String> = (row * 3..(row + 1) * 3).map(|i| i.to_string()).collect();
                format!("| {} |", labels.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let letters: Vec<String> = chunk.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "| {} |", letters.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.count_empty_squares(), 9);
        assert!(board.has_empty_square());
        assert_eq!(board.current_winner(), None);
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_apply_move() {
        let mut board = Board::new();

        assert!(board.apply_move(4, Player::X));
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.count_empty_squares(), 8);

        // Move on occupied cell
        let before = board;
        assert!(!board.apply_move(4, Player::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut board = Board::new();
        assert!(!board.apply_move(9, Player::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = board_from("X.O.X.O..");
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = board_from("XX.OO....");
        assert!(board.apply_move(2, Player::X));
        assert_eq!(board.current_winner(), Some(Player::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = board_from("XO..O.X..");
        assert!(board.apply_move(7, Player::O));
        assert_eq!(board.current_winner(), Some(Player::O));
    }

    #[test]
    fn test_from_string_recomputes_winner() {
        let board = board_from("XO.XO.X..");
        assert_eq!(board.current_winner(), Some(Player::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_win_detection_anti_diagonal() {
        let mut board = board_from("XXO.O....");
        assert!(board.apply_move(6, Player::O));
        assert_eq!(board.current_winner(), Some(Player::O));
    }

    #[test]
    fn test_check_winner_only_reports() {
        let board = board_from("XXXOO....");
        assert!(board.check_winner(1, Player::X));
        assert!(!board.check_winner(1, Player::O));

        let fresh = board_from("XX.O.....");
        assert!(!fresh.check_winner(1, Player::X));
        assert_eq!(fresh.current_winner(), None);
    }

    #[test]
    fn test_winner_is_sticky() {
        let mut board = board_from("XX.OO....");
        assert!(board.apply_move(2, Player::X));
        assert!(board.apply_move(8, Player::O));
        assert_eq!(board.current_winner(), Some(Player::X));
    }

    #[test]
    fn test_undo_move_restores() {
        let mut board = board_from("XX.OO....");
        let before = board;
        assert!(board.apply_move(2, Player::X));
        board.undo_move(2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_draw_is_terminal_without_winner() {
        let board = board_from("XOXXOOOXX");
        assert_eq!(board.current_winner(), None);
        assert!(!board.has_empty_square());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_from_string() {
        let board = board_from("XO. ... ...");
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.count_empty_squares(), 7);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_from_string_rejects_extra_cells() {
        let err = Board::from_string("XX.OO....OOOOOOO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_from_string_parses_rendered_grid() {
        let mut board = Board::new();
        assert!(board.apply_move(4, Player::X));
        assert!(board.apply_move(0, Player::O));
        assert_eq!(Board::from_string(&board.to_string()).unwrap(), board);

        assert_eq!(Board::from_string(&Board::new().to_string()).unwrap(), Board::new());

        let won = board_from("XO.XO.X..");
        assert_eq!(Board::from_string(&won.to_string()).unwrap(), won);
    }

    #[test]
    fn test_from_string_rejects_short_grid() {
        let err = Board::from_string("| X | O |   |\n|   | X |   |").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidBoardLength { got: 6, .. }));
    }

    #[test]
    fn test_from_string_rejects_unreachable_counts() {
        let err = Board::from_string("XXOXX.O..").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidPieceCounts {
                x_count: 4,
                o_count: 2
            }
        ));

        assert!(matches!(
            Board::from_string("O........"),
            Err(crate::Error::InvalidPieceCounts { .. })
        ));
    }

    #[test]
    fn test_player_to_move() {
        assert_eq!(Board::new().player_to_move().unwrap(), Player::X);
        assert_eq!(board_from("XX.O.....").player_to_move().unwrap(), Player::O);
        assert_eq!(board_from("XX.OO....").player_to_move().unwrap(), Player::X);
        assert_eq!(board_from("XX.OO....").count_pieces(), (2, 2));

        let mut board = Board::new();
        assert!(board.apply_move(0, Player::X));
        assert!(board.apply_move(1, Player::X));
        assert!(board.player_to_move().is_err());
    }

    #[test]
    fn test_from_string_rejects_double_winner() {
        let err = Board::from_string("XXXOOO...").unwrap_err();
        assert!(err.to_string().contains("both players"));
    }

    #[test]
    fn test_display() {
        let board = board_from("XO..X...O");
        assert_eq!(
            board.to_string(),
            "| X | O |   |\n|   | X |   |\n|   |   | O |"
        );
    }

    #[test]
    fn test_legend() {
        assert_eq!(
            Board::legend(),
            "| 0 | 1 | 2 |\n| 3 | 4 | 5 |\n| 6 | 7 | 8 |"
        );
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::O.to_string(), "O");
    }
}
