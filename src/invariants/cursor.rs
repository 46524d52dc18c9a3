//! Current-move pointer invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the current move points at an existing snapshot.
pub struct CursorInBounds;

impl Invariant<GameState> for CursorInBounds {
    fn holds(game: &GameState) -> bool {
        game.current_move < game.history.len()
    }

    fn description() -> &'static str {
        "Current move points into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_across_jumps() {
        let mut game = GameState::from_moves([Position::Center, Position::TopLeft]);
        for mv in 0..game.history_length() {
            game.jump_to(mv);
            assert!(CursorInBounds::holds(&game));
        }
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut game = GameState::new();
        game.current_move = 1;
        assert!(!CursorInBounds::holds(&game));
    }
}
