use crate::ui::palette::PALETTE;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, colors: [usize; 2], focus: usize, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Player rows
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("Choose Colors")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, chunks[0]);

    let mut lines = vec![Line::from("")];
    for player in 0..2 {
        lines.push(player_line(player, colors[player], player == focus));
        lines.push(Line::from(""));
    }
    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);

    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[2]);

    let controls =
        Paragraph::new("↑/↓: Switch Player  |  ←/→: Change Color  |  Enter: Start  |  Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[3]);
}

fn player_line(player: usize, color_index: usize, focused: bool) -> Line<'static> {
    let entry = &PALETTE[color_index];

    let arrow_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label_style = if focused {
        Style::default()
            .fg(entry.color)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(entry.color)
    };

    Line::from(vec![
        Span::raw(format!("Player {}:  ", player + 1)),
        Span::styled("◀ ", arrow_style),
        Span::styled(format!("{:^8}", entry.label), label_style),
        Span::styled(" ▶", arrow_style),
    ])
}
