//! Error types for the tic-tac-toe timeline.

/// Errors surfaced by checked operations on the game timeline.
///
/// Ordinary gameplay never produces these: clicking an occupied square or
/// playing after a win is a silent no-op. They report caller mistakes and
/// broken invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TimelineError {
    /// A board index outside `0..=8`.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidPosition(#[error(not(source))] usize),

    /// A history index past the last snapshot.
    #[display("Move {} is out of range (history has {} snapshots)", requested, len)]
    MoveOutOfRange {
        /// The move that was asked for.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// Text that does not describe a board.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(#[error(not(source))] String),

    /// Text that names no square.
    #[display("Unknown position: {}", _0)]
    UnknownPosition(#[error(not(source))] String),

    /// One or more timeline invariants failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
