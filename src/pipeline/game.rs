//! Turn-by-turn game driver

use tracing::{instrument, trace, warn};

use crate::{
    Error, Result,
    ports::{Agent, GameObserver},
    tictactoe::{Board, GameOutcome, GameRecord, Move, Player},
};

/// How many illegal proposals in a row an agent gets before the game aborts
pub const MAX_REJECTED_MOVES: usize = 9;

/// Play one game on `board`, X moving first.
///
/// Each turn the side to move is asked for a cell and the move goes through
/// [`Board::apply_move`]. A rejected move is asked for again, up to
/// [`MAX_REJECTED_MOVES`] times in a row. The game ends as soon as a move
/// completes a line, or in a tie once no empty cell remains.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] if an agent plays the wrong letter
/// - [`Error::IllegalMoveLimit`] if an agent keeps proposing illegal moves
/// - Any error returned by an agent or observer
#[instrument(skip(board, x_agent, o_agent, observer), fields(x = x_agent.name(), o = o_agent.name()))]
pub fn play_game(
    game_num: usize,
    board: &mut Board,
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    observer: &mut dyn GameObserver,
) -> Result<GameRecord> {
    for (agent, expected) in [(&*x_agent, Player::X), (&*o_agent, Player::O)] {
        if agent.letter() != expected {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "{} plays {} but was seated as {}",
                    agent.name(),
                    agent.letter(),
                    expected
                ),
            });
        }
    }

    observer.on_game_start(game_num, board)?;

    let mut letter = Player::X;
    let mut moves = Vec::with_capacity(board.count_empty_squares());
    let mut rejected = 0;

    let outcome = loop {
        if let Some(winner) = board.current_winner() {
            break GameOutcome::Win(winner);
        }
        if !board.has_empty_square() {
            break GameOutcome::Tie;
        }

        let agent: &mut dyn Agent = match letter {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };
        let square = agent.select_move(board)?;

        if !board.apply_move(square, letter) {
            rejected += 1;
            warn!(agent = agent.name(), square, rejected, "illegal move rejected");
            if rejected >= MAX_REJECTED_MOVES {
                return Err(Error::IllegalMoveLimit {
                    agent: agent.name().to_string(),
                    attempts: rejected,
                });
            }
            continue;
        }

        rejected = 0;
        let mv = Move {
            position: square,
            player: letter,
        };
        trace!(%letter, square, "move applied");
        moves.push(mv);
        observer.on_move(game_num, mv, board)?;
        letter = letter.opponent();
    };

    observer.on_game_end(game_num, outcome)?;
    Ok(GameRecord { moves, outcome })
}
