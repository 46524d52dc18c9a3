//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use tictactoe_timeline::GameState;
use tictactoe_timeline_tui::{App, TuiConfig, ui};

fn render_buffer(app: &App, config: &TuiConfig) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| ui::draw(f, app, config)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(app: &App, config: &TuiConfig) -> String {
    let buffer = render_buffer(app, config);
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn app_after(keys: &str) -> App {
    let mut app = App::new();
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
    app
}

#[test]
fn test_fresh_game_screen() {
    let screen = render(&App::new(), &TuiConfig::default());
    assert!(screen.contains("Tic Tac Toe - Timeline"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(!screen.contains("Go to move #1"));
}

#[test]
fn test_move_list_and_status_after_win() {
    let screen = render(&app_after("12539"), &TuiConfig::default());
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #1 (X at Top-left)"));
    assert!(screen.contains("Go to move #5 (X at Bottom-right)"));
}

#[test]
fn test_status_shows_position_in_timeline() {
    let mut app = app_after("123");
    app.handle_key(KeyCode::Char('['));
    let screen = render(&app, &TuiConfig::default());
    assert!(screen.contains("Next player: X (viewing move 2 of 3)"));
}

#[test]
fn test_ignored_play_message_is_shown() {
    let screen = render(&app_after("55"), &TuiConfig::default());
    assert!(screen.contains("Center is already occupied"));
}

#[test]
fn test_cell_numbers_follow_config() {
    let with_numbers = render(&App::new(), &TuiConfig::default());
    assert!(with_numbers.contains(" 7 "));

    let config: TuiConfig = toml::from_str("show_cell_numbers = false").unwrap();
    let without = render(&App::new(), &config);
    assert!(!without.contains(" 7 "));
}

#[test]
fn test_move_label() {
    let game = GameState::from_moves([tictactoe_timeline::Position::Center]);
    assert_eq!(ui::move_label(&game, 0), "Go to game start");
    assert_eq!(ui::move_label(&game, 1), "Go to move #1 (X at Center)");
    assert_eq!(ui::move_label(&game, 2), "Go to move #2");
}

fn green_symbols(buffer: &Buffer) -> String {
    buffer
        .content()
        .iter()
        .filter(|cell| cell.bg == Color::Green)
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_winning_line_is_highlighted() {
    // X@0, O@1, X@4, O@2, X@8, then focus the move list so no cursor is drawn.
    let mut app = app_after("12539");
    app.handle_key(KeyCode::Tab);

    let highlighted = green_symbols(&render_buffer(&app, &TuiConfig::default()));
    assert_eq!(highlighted.len(), 9);
    assert_eq!(highlighted.matches('X').count(), 3);
    assert!(!highlighted.contains('O'));
}

#[test]
fn test_winning_line_highlight_can_be_disabled() {
    let mut app = app_after("12539");
    app.handle_key(KeyCode::Tab);

    let config: TuiConfig = toml::from_str("highlight_winning_line = false").unwrap();
    assert_eq!(green_symbols(&render_buffer(&app, &config)), "");
}
