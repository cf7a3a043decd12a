use crate::tui::state::{AppState, Speaker};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    // Transcript on top, 3-line input footer below
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let items: Vec<ListItem> = state
        .transcript
        .iter()
        .map(|entry| {
            let style = match entry.speaker {
                Speaker::User => Style::default().fg(Color::Yellow),
                Speaker::Assistant => Style::default().fg(Color::White),
            };
            let prefix = match entry.speaker {
                Speaker::User => "you> ",
                Speaker::Assistant => "",
            };
            let lines: Vec<Line> = entry
                .text
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    if i == 0 {
                        Line::styled(format!("{}{}", prefix, line), style)
                    } else {
                        Line::styled(line.to_string(), style)
                    }
                })
                .collect();
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Taskpal "))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_stateful_widget(list, chunks[0], &mut state.list_state);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Command (Enter to send, Esc to quit) ");
    let input_text = Paragraph::new(format!("> {}_", state.input_buffer))
        .style(Style::default().fg(Color::Yellow))
        .block(input_block);
    f.render_widget(input_text, chunks[1]);
}
