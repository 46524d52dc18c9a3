//! Terminal front end for tictactoe_timeline.
//!
//! Reads the current board and turn from a [`GameState`](tictactoe_timeline::GameState),
//! draws the board, status line and move list with ratatui, and turns key
//! presses into `play` and `jump_to` calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, Control, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
