//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_timeline::{Board, Cell, Mark, Position, WinResult};

/// Renders the board centered in `area`.
///
/// `cursor` is highlighted when given; squares of `winning` are
/// highlighted in green.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    winning: Option<WinResult>,
    show_numbers: bool,
) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let look = CellLook {
        cursor,
        winning,
        show_numbers,
    };
    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(frame, area, board, row, &look);
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);
}

struct CellLook {
    cursor: Option<Position>,
    winning: Option<WinResult>,
    show_numbers: bool,
}

fn render_row(frame: &mut Frame, area: Rect, board: &Board, row: usize, look: &CellLook) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            render_cell(frame, area, board, pos, look);
        }
    }
    render_vertical_sep(frame, cols[1]);
    render_vertical_sep(frame, cols[3]);
}

fn render_cell(frame: &mut Frame, area: Rect, board: &Board, pos: Position, look: &CellLook) {
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty if look.show_numbers => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if look.cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if look.winning.is_some_and(|win| win.contains(pos)) {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
