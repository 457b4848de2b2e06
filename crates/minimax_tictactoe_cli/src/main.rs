//! Minimax tic-tac-toe - command-line harness
//!
//! Suggests perfect-play moves and runs minimax self-play games.

#![warn(missing_docs)]

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use minimax_tictactoe::{
    actions, evaluate, initial_state, minimax, player, result, terminal, utility, winner, Board,
    Move,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Suggest { board } => suggest(&board),
        Command::SelfPlay { board } => self_play(board.unwrap_or_else(initial_state), &config),
    }
}

/// Prints the analysis of a single board.
#[instrument(skip(board), fields(board = %board.notation()))]
fn suggest(board: &Board) -> Result<()> {
    println!("{board}\n");

    if terminal(board) {
        match winner(board) {
            Some(mark) => println!("Game over: {mark} wins"),
            None => println!("Game over: draw"),
        }
        return Ok(());
    }

    let legal: Vec<String> = actions(board).iter().map(Move::to_string).collect();
    println!("To move: {}", player(board));
    println!("Legal moves: {}", legal.join(" "));

    let eval = evaluate(board);
    info!(nodes = eval.nodes, "Board analysed");
    println!("Value with perfect play: {}", eval.utility);
    if let Some(mv) = eval.best_move {
        println!("Best move: {mv}");
    }

    Ok(())
}

/// Plays minimax against itself from `board` until the game ends.
#[instrument(skip(board, config), fields(board = %board.notation()))]
fn self_play(mut board: Board, config: &CliConfig) -> Result<()> {
    info!("Starting self-play");

    while let Some(mv) = minimax(&board) {
        let mover = player(&board);
        board = result(&board, mv).with_context(|| format!("Applying {mv} for {mover}"))?;
        debug!(%mover, %mv, board = %board.notation(), "Move played");

        if *config.show_boards() {
            println!("{mover} plays {mv}\n{board}\n");
        }
    }

    if !*config.show_boards() {
        println!("{board}\n");
    }

    match winner(&board) {
        Some(mark) => println!("Result: {mark} wins (utility {})", utility(&board)),
        None => println!("Result: draw (utility {})", utility(&board)),
    }
    info!(utility = %utility(&board), "Self-play finished");

    Ok(())
}
