//! Status line derivation.

use super::{evaluate, is_draw};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line should say about a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Every square is taken and nobody won.
    #[display("Draw")]
    Draw,
    /// Play continues with this mark.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Whether play is over on this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Classifies `board` with `turn` to move.
///
/// A winner takes precedence over a full board.
#[instrument(skip(board))]
pub fn status(board: &Board, turn: Mark) -> Status {
    if let Some(win) = evaluate(board) {
        Status::Winner(win.mark())
    } else if is_draw(board) {
        Status::Draw
    } else {
        Status::NextPlayer(turn)
    }
}
