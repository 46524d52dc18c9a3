//! Tic-tac-toe with time travel.
//!
//! This library holds the rules and state of a two-player tic-tac-toe game
//! whose every move is kept as an immutable board snapshot. Any earlier
//! snapshot can be revisited, and playing from the past replaces the
//! abandoned future with a new line of play.
//!
//! # Architecture
//!
//! - **GameState**: snapshot history plus the move currently on display
//! - **rules**: pure win/draw evaluation of a single board
//! - **invariants**: properties every reachable game state satisfies
//!
//! Rendering lives elsewhere: a front end reads the current board and turn,
//! asks [`rules`] for the status and winning line, and calls
//! [`GameState::play`] or [`GameState::jump_to`] in response to input.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Mark, Position, rules};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::Center, Position::TopRight] {
//!     game.play(pos);
//! }
//! game.play(Position::BottomRight);
//!
//! let win = rules::evaluate(game.current_board()).unwrap();
//! assert_eq!(win.mark(), Mark::X);
//! assert_eq!(win.indices(), [0, 4, 8]);
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Revisit move 2 and branch.
//! game.jump_to(2);
//! game.play(Position::BottomLeft);
//! assert_eq!(game.history_length(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use error::TimelineError;
pub use game::{GameState, IgnoreReason, PlayOutcome};
pub use position::Position;
pub use rules::{Status, WinResult};
pub use types::{Board, Cell, Mark};
