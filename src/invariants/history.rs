//! Invariants over the snapshot history.

use super::Invariant;
use crate::{Board, Cell, GameState, Mark};

/// Invariant: the first snapshot is the empty board.
pub struct EmptyOrigin;

impl Invariant<GameState> for EmptyOrigin {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// Existing marks never change, and exactly one empty square becomes
/// occupied per step.
pub struct SingleMarkSteps;

impl Invariant<GameState> for SingleMarkSteps {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .all(|pair| added_marks(&pair[0], &pair[1]).is_some_and(|added| added.len() == 1))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark"
    }
}

/// Invariant: the mark added at step `k` belongs to the player whose turn
/// it was at `k - 1`.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).enumerate().all(|(k, pair)| {
            added_marks(&pair[0], &pair[1])
                .is_some_and(|added| added.iter().all(|mark| *mark == Mark::for_move(k)))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Marks added going from `before` to `after`.
///
/// `None` if any square was cleared or changed owner.
fn added_marks(before: &Board, after: &Board) -> Option<Vec<Mark>> {
    let mut added = Vec::new();
    for (b, a) in before.cells().iter().zip(after.cells()) {
        match (b, a) {
            (Cell::Empty, Cell::Occupied(mark)) => added.push(*mark),
            (b, a) if b == a => {}
            _ => return None,
        }
    }
    Some(added)
}
