//! Command-line interface for the minimax tic-tac-toe engine.

use clap::{Parser, Subcommand};
use minimax_tictactoe::Board;
use std::path::PathBuf;

/// Minimax tic-tac-toe - perfect-play move suggestions and self-play
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest the optimal move for a board
    Suggest {
        /// Board in row-major notation, e.g. "X.O/.X./..O"
        board: Board,
    },

    /// Let minimax play both sides until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        board: Option<Board>,
    },
}
