//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_timeline::{GameState, PlayOutcome, Position};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor, `Enter` plays.
    #[default]
    Board,
    /// Arrows move the move-list selection, `Enter` jumps.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep handling events.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Owns the only [`GameState`]; every key press runs to completion
/// before the next one is read.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application at the start of a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            message: None,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The highlighted entry in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Home => self.jump_to(0),
            KeyCode::End => self.jump_to(self.game.history_length() - 1),
            KeyCode::Char(_) if digit_position(key).is_some() => {
                if let Some(pos) = digit_position(key) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.game.history_length() - 1;
        match key {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_move),
            _ => {}
        }
    }

    /// Plays the current player's mark at `pos`.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        let outcome = self.game.play(pos);
        debug!(%outcome, "Play handled");
        self.message = match outcome {
            PlayOutcome::Ignored(reason) => Some(reason.to_string()),
            PlayOutcome::Placed { discarded: 0, .. } => None,
            PlayOutcome::Placed { discarded, .. } => {
                Some(format!("Replaced {} later move(s) with a new line", discarded))
            }
        };
        self.selected_move = self.game.current_move();
    }

    /// Shows snapshot `mv`. Out-of-range moves are clamped to the newest.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) {
        let mv = mv.min(self.game.history_length() - 1);
        self.game.jump_to(mv);
        self.selected_move = mv;
        self.message = None;
    }

    /// Shows the previous snapshot, if any.
    pub fn step_back(&mut self) {
        if let Some(mv) = self.game.current_move().checked_sub(1) {
            self.jump_to(mv);
        }
    }

    /// Shows the next snapshot, if any.
    pub fn step_forward(&mut self) {
        if !self.game.is_latest() {
            self.jump_to(self.game.current_move() + 1);
        }
    }

    /// Starts over with a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self {
            focus: self.focus,
            ..Self::new()
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
