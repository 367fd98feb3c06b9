//! CLI infrastructure for the `ttt` binary
//!
//! Subcommands play a single game, run batch simulations, or solve a given
//! position with the minimax engine.

pub mod commands;
pub mod output;
