//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every square is occupied.
///
/// This does not look for a winner. A full board with a completed line is
/// a win, so callers should consult [`evaluate`](super::evaluate) first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
