//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tictactoe_timeline::GameState;

/// Label for the move-list entry that jumps to snapshot `mv`.
pub fn move_label(game: &GameState, mv: usize) -> String {
    if mv == 0 {
        return "Go to game start".to_string();
    }
    match game.placement(mv) {
        Some((mark, pos)) => format!("Go to move #{} ({} at {})", mv, mark, pos),
        None => format!("Go to move #{}", mv),
    }
}

/// Renders one entry per snapshot, marking the one on display.
pub fn render_moves(
    frame: &mut Frame,
    area: Rect,
    game: &GameState,
    selected: usize,
    focused: bool,
) {
    let items: Vec<ListItem> = (0..game.history_length())
        .map(|mv| {
            let current = mv == game.current_move();
            let marker = if current { "* " } else { "  " };
            let style = if current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{}", marker, move_label(game, mv))).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Moves "),
    );
    if focused {
        list = list.highlight_style(Style::default().bg(Color::White).fg(Color::Black));
    }

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
