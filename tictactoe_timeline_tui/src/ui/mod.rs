//! Stateless UI rendering.

mod board;
mod moves;

pub use board::render_board;
pub use moves::{move_label, render_moves};

use crate::app::{App, Focus};
use crate::config::TuiConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Key help shown on the bottom line.
pub const HELP: &str =
    "arrows move  enter play/jump  1-9 play  tab switch panel  [ ] step  home/end  r restart  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe - Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let game = app.game();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let winning = game.winner().filter(|_| *config.highlight_winning_line());
    render_board(
        frame,
        body[0],
        game.current_board(),
        cursor,
        winning,
        *config.show_cell_numbers(),
    );
    render_moves(
        frame,
        body[1],
        game,
        app.selected_move(),
        app.focus() == Focus::Moves,
    );

    frame.render_widget(status_paragraph(app), chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Status text for the viewed board, plus where in the timeline it sits.
pub fn status_text(app: &App) -> String {
    let game = app.game();
    let status = game.status().to_string();
    if game.is_latest() {
        status
    } else {
        format!(
            "{} (viewing move {} of {})",
            status,
            game.current_move(),
            game.history_length() - 1
        )
    }
}

fn status_paragraph(app: &App) -> Paragraph<'static> {
    let mut lines = vec![Line::from(status_text(app))];
    if let Some(message) = app.message() {
        lines.push(Line::from(message.to_string()).style(Style::default().fg(Color::Red)));
    }

    Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}
