//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a sequence of moves from an empty board and print every snapshot
    Replay {
        /// Positions as indices (0-8) or labels (e.g. center, top-left),
        /// separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,

        /// Show this snapshot again after the replay
        #[arg(long)]
        jump: Option<usize>,
    },
}

impl Cli {
    /// The selected command, `play` when none was given.
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe_timeline"]);
        assert_eq!(cli.selected_command(), Command::Play);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "tictactoe_timeline",
            "replay",
            "0,1",
            "center",
            "--jump",
            "2",
            "--config",
            "game.toml",
        ]);
        assert_eq!(
            cli.selected_command(),
            Command::Replay {
                moves: vec!["0,1".to_string(), "center".to_string()],
                jump: Some(2),
            }
        );
        assert_eq!(cli.config, Some("game.toml".into()));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}
