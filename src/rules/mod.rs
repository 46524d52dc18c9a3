//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a single board snapshot. Nothing here
//! looks at history or mutates state, so the same board always
//! evaluates the same way.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_draw;
pub use status::{Status, status};
pub use win::{LINES, WinResult, evaluate};
