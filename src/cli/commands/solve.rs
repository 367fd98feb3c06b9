//! Solve command - best move and score for a given position

use anyhow::Result;
use clap::Parser;

use crate::{
    search::{SearchEngine, SearchResult},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct SolveArgs {
    /// Board as 9 cells, e.g. "XX.OO...." ('.' for empty)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Player to move; inferred from piece counts when omitted
    #[arg(long, short = 'p', value_enum, ignore_case = true)]
    pub player: Option<Player>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// A solved position: the parsed board, the side searched for and its best move
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub board: Board,
    pub player: Player,
    pub result: SearchResult,
}

/// Parse the board and search it for the side to move
pub fn solve(args: &SolveArgs) -> Result<Solution> {
    let board = Board::from_string(&args.board)?;
    let player = match args.player {
        Some(player) => player,
        None => board.player_to_move()?,
    };

    let mut scratch = board;
    let result = SearchEngine::new(player).best_move(&mut scratch, player)?;
    Ok(Solution {
        board,
        player,
        result,
    })
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let Solution {
        board,
        player,
        result,
    } = solve(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{board}\n");
    match result.position {
        Some(position) => println!(
            "Best move for {player}: square {position} (row {}, col {}), score {}",
            position / 3,
            position % 3,
            result.score
        ),
        None => println!("No move for {player}"),
    }
    Ok(())
}
