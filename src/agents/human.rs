//! Human player reading moves from a text stream

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Agent that prompts for a cell index and re-prompts until it gets a legal one.
///
/// Input and output are generic so the prompt loop can be driven from tests.
pub struct HumanAgent<R, W> {
    letter: Player,
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Human agent bound to the process's standard input and output
    pub fn stdio(letter: Player) -> Self {
        Self::new(letter, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(letter: Player, input: R, output: W) -> Self {
        Self {
            letter,
            name: format!("Human {letter}"),
            input,
            output,
        }
    }

    /// Consume the agent and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_io(&mut self, text: &str, newline: bool) -> Result<()> {
        let written = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        written
            .and_then(|_| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write prompt".to_string(),
                source,
            })
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn letter(&self) -> Player {
        self.letter
    }

    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            let prompt = format!("{}'s turn. Input move (0-8): ", self.letter);
            self.write_io(&prompt, false)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| Error::Io {
                    operation: "read move".to_string(),
                    source,
                })?;
            if read == 0 {
                return Err(Error::InputClosed {
                    player: self.letter,
                });
            }

            match line.trim().parse::<usize>() {
                Ok(square) if available.contains(&square) => return Ok(square),
                _ => self.write_io("Invalid square. Try again.", true)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
