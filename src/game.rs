//! Game state with snapshot history and time-travel navigation.
//!
//! The canonical state is a list of board snapshots plus a pointer to the
//! snapshot being viewed. Whose turn it is, who won and whether the game is
//! drawn are all computed from those two values.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::{self, Status, WinResult};
use crate::{Board, Cell, Mark, Position, TimelineError};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Why a play was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The viewed board already has a winner.
    #[display("{} has already won", _0)]
    AlreadyWon(Mark),
    /// The square is taken.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

/// What a call to [`GameState::play`] did.
///
/// Purely informational: an ignored play leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayOutcome {
    /// A mark was placed and a new snapshot appended.
    #[display("{} played {}", mark, position)]
    Placed {
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Future snapshots dropped because play resumed from an earlier move.
        discarded: usize,
    },
    /// The play was a no-op.
    #[display("Ignored: {}", _0)]
    Ignored(IgnoreReason),
}

impl PlayOutcome {
    /// Whether a mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// Board history and the move currently on display.
///
/// `history[0]` is always the empty board, and each later snapshot adds
/// exactly one mark to the one before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Replays `moves` from an empty game.
    ///
    /// Moves that would be ignored by [`play`](Self::play) are skipped.
    #[instrument(skip(moves))]
    pub fn from_moves(moves: impl IntoIterator<Item = Position>) -> Self {
        let mut game = Self::new();
        for pos in moves {
            game.play(pos);
        }
        game
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Does nothing if the viewed board already has a winner or the square
    /// is occupied. Otherwise every snapshot after the current move is
    /// dropped, the new board is appended, and the view moves to it.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, pos: Position) -> PlayOutcome {
        let board = *self.current_board();

        // Both guards stay separate: a full board can also be a won board.
        if let Some(win) = rules::evaluate(&board) {
            debug!(winner = %win.mark(), "Ignoring play on a won board");
            return PlayOutcome::Ignored(IgnoreReason::AlreadyWon(win.mark()));
        }
        if !board.is_empty(pos) {
            debug!("Ignoring play on an occupied square");
            return PlayOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let mark = self.current_turn();
        let next = board.with_mark(pos, mark);

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        if discarded > 0 {
            info!(discarded, "Branched from an earlier move");
        }
        debug!(%mark, move_number = self.current_move, "Mark placed");

        debug_assert!(
            self.verify().is_ok(),
            "timeline invariants broken after play: {:?}",
            self.verify()
        );

        PlayOutcome::Placed {
            mark,
            position: pos,
            discarded,
        }
    }

    /// Moves the view to snapshot `mv` without touching the history.
    ///
    /// # Panics
    ///
    /// Panics if `mv >= history_length()`. Callers build their move lists
    /// from the history, so an out-of-range move is a bug. Use
    /// [`try_jump_to`](Self::try_jump_to) for unchecked input.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) {
        assert!(
            mv < self.history.len(),
            "jump_to({}) out of range: history has {} snapshots",
            mv,
            self.history.len()
        );
        self.current_move = mv;
        debug!("Jumped");
    }

    /// Checked variant of [`jump_to`](Self::jump_to).
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, mv: usize) -> Result<(), TimelineError> {
        if mv >= self.history.len() {
            return Err(TimelineError::MoveOutOfRange {
                requested: mv,
                len: self.history.len(),
            });
        }
        self.jump_to(mv);
        Ok(())
    }

    /// The board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whose turn it is at the current move.
    pub fn current_turn(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots, including the empty starting board.
    pub fn history_length(&self) -> usize {
        self.history.len()
    }

    /// All snapshots in order.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The snapshot at `mv`, if it exists.
    pub fn board_at(&self, mv: usize) -> Option<&Board> {
        self.history.get(mv)
    }

    /// Whether the view is at the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// The mark and square that turned snapshot `mv - 1` into `mv`.
    ///
    /// `None` for the starting board and for moves past the end.
    pub fn placement(&self, mv: usize) -> Option<(Mark, Position)> {
        let before = self.history.get(mv.checked_sub(1)?)?;
        let after = self.history.get(mv)?;
        Position::ALL.iter().find_map(|&pos| match (before.get(pos), after.get(pos)) {
            (Cell::Empty, Cell::Occupied(mark)) => Some((mark, pos)),
            _ => None,
        })
    }

    /// The winning line on the current board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> Status {
        rules::status(self.current_board(), self.current_turn())
    }

    /// Checks every timeline invariant.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), TimelineError> {
        TimelineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            TimelineError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
