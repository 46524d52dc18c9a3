//! tictactoe_timeline - unified CLI
//!
//! Interactive play in the terminal, or a printed replay of a move list.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_timeline_tui::{Cli, Command, TuiConfig, logging, replay, terminal};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.selected_command() {
        Command::Play => {
            logging::init_file_logging(&config)?;
            logging::record_config(&config, cli.config.as_deref());
            terminal::run(&config)
        }
        Command::Replay { moves, jump } => {
            logging::init_stderr_logging(&config);
            logging::record_config(&config, cli.config.as_deref());
            run_replay(&moves, jump)
        }
    }
}

/// Print a replay of the given moves
#[instrument]
fn run_replay(moves: &[String], jump: Option<usize>) -> Result<()> {
    let positions = replay::parse_moves(moves)?;
    info!(count = positions.len(), "Replaying moves");
    print!("{}", replay::replay(&positions, jump)?);
    Ok(())
}
