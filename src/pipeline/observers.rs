//! Observer implementations for interactive play and batch simulation

use std::io::{self, Stdout, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Result,
    ports::GameObserver,
    tictactoe::{Board, GameOutcome, Move, Player},
};

/// Console observer - narrates a game move by move
///
/// Prints the numbered legend when a game starts, then each move followed by
/// the board, then the result.
pub struct ConsoleObserver<W> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|source| Error::Io {
            operation: "write game output".to_string(),
            source,
        })
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_game_start(&mut self, _game_num: usize, _board: &Board) -> Result<()> {
        self.emit(&Board::legend())
    }

    fn on_move(&mut self, _game_num: usize, mv: Move, board: &Board) -> Result<()> {
        self.emit(&format!("{} makes a move to square {}", mv.player, mv.position))?;
        self.emit(&board.to_string())?;
        self.emit("")
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(player) => self.emit(&format!("{player} wins!")),
            GameOutcome::Tie => self.emit("It's a tie!"),
        }
    }
}

/// Progress bar observer - shows simulation progress with running tallies
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    ties: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            ties: 0,
        }
    }

    fn message(&self) -> String {
        format!("X:{} O:{} T:{}", self.x_wins, self.o_wins, self.ties)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for ProgressObserver {
    fn on_simulation_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Tie => self.ties += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Fan events out to every observer in order, stopping at the first error
impl GameObserver for Vec<Box<dyn GameObserver>> {
    fn on_simulation_start(&mut self, total_games: usize) -> Result<()> {
        self.iter_mut()
            .try_for_each(|o| o.on_simulation_start(total_games))
    }

    fn on_game_start(&mut self, game_num: usize, board: &Board) -> Result<()> {
        self.iter_mut()
            .try_for_each(|o| o.on_game_start(game_num, board))
    }

    fn on_move(&mut self, game_num: usize, mv: Move, board: &Board) -> Result<()> {
        self.iter_mut()
            .try_for_each(|o| o.on_move(game_num, mv, board))
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.iter_mut()
            .try_for_each(|o| o.on_game_end(game_num, outcome))
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        self.iter_mut().try_for_each(|o| o.on_simulation_end())
    }
}
