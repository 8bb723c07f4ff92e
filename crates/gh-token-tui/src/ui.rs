//! UI rendering with Ratatui.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Main render function: query line on top, matches below.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("▸ ", Style::default().fg(Color::Cyan)),
        Span::raw(app.query.as_str()),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(format!(" Select token ({}/{}) ", app.matches.len(), app.candidates.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = app
        .matches
        .iter()
        .map(|m| ListItem::new(highlighted(&app.candidates[m.index], &m.positions)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Enter: select · Esc: cancel ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.matches.is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// Render `text` with the matched character positions emphasized.
fn highlighted<'a>(text: &'a str, positions: &[usize]) -> Line<'a> {
    if positions.is_empty() {
        return Line::raw(text);
    }

    let matched = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if positions.contains(&i) {
                Span::styled(c.to_string(), matched)
            } else {
                Span::raw(c.to_string())
            }
        })
        .collect();
    Line::from(spans)
}
