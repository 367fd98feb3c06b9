//! Play command - a single narrated game

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::{AgentKind, AgentOptions},
    pipeline::{ConsoleObserver, play_game},
    ports::{GameObserver, SilentObserver},
    tictactoe::{Board, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play one game")]
pub struct PlayArgs {
    /// Agent playing X (moves first)
    #[arg(long = "x", value_enum, default_value = "human")]
    pub x_agent: AgentKind,

    /// Agent playing O
    #[arg(long = "o", value_enum, default_value = "genius")]
    pub o_agent: AgentKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let genius agents search the empty board instead of opening at random
    #[arg(long)]
    pub search_opening: bool,

    /// Only print the result
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let options = |offset: u64| AgentOptions {
        seed: args.seed.map(|s| s.wrapping_add(offset)),
        random_opening: !args.search_opening,
    };
    let mut x_agent = args.x_agent.build(Player::X, options(0));
    let mut o_agent = args.o_agent.build(Player::O, options(1));

    let mut observer: Box<dyn GameObserver> = if args.quiet {
        Box::new(SilentObserver)
    } else {
        Box::new(ConsoleObserver::stdout())
    };

    let mut board = Board::new();
    let record = play_game(
        0,
        &mut board,
        x_agent.as_mut(),
        o_agent.as_mut(),
        observer.as_mut(),
    )?;

    if args.quiet {
        println!("{board}");
        match record.outcome {
            GameOutcome::Win(player) => println!("{player} wins!"),
            GameOutcome::Tie => println!("It's a tie!"),
        }
    }

    Ok(())
}
