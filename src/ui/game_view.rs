use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, GameEngine, GameStatus, Seat};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    colors: &[Color; 2],
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = u16::try_from(engine.dimensions().height)
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, colors, chunks[0]);
    render_board(frame, engine, colors, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn seat_color(colors: &[Color; 2], seat: Seat) -> Color {
    colors[seat.index()]
}

fn render_header(frame: &mut Frame, engine: &GameEngine, colors: &[Color; 2], area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let seat = engine.current_seat();
            (
                format!("Current Player: {}", engine.player(seat).name()),
                seat_color(colors, seat),
            )
        }
        GameStatus::Won(seat) => (
            format!("Game Over  |  {} won", engine.player(seat).name()),
            seat_color(colors, seat),
        ),
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    colors: &[Color; 2],
    selected_column: usize,
    area: Rect,
) {
    let dims = engine.dimensions();
    let winning_line = engine.winning_line();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..dims.width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(dims.width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..dims.height {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..dims.width {
            let winning = winning_line.is_some_and(|line| line.contains(&(row, col)));
            let span = match engine.cell(row, col) {
                Some(Cell::Taken(seat)) if winning => Span::styled(
                    " ◆ ",
                    Style::default()
                        .fg(seat_color(colors, seat))
                        .add_modifier(Modifier::BOLD),
                ),
                Some(Cell::Taken(seat)) => {
                    Span::styled(" ● ", Style::default().fg(seat_color(colors, seat)))
                }
                _ => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..dims.width {
        if col == selected_column && !engine.is_game_over() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter or 1-9: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
