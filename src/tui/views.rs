//! TUI rendering.
//!
//! Three areas: the response pane (rendering the current display state),
//! the input box, and a footer carrying keybinds or the active notice.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::state::AppState;
use crate::display::DisplayState;

/// Render the whole screen.
pub fn render(state: &AppState, display: &DisplayState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3), Constraint::Length(1)])
        .split(frame.area());

    // Response pane
    let style = match display {
        DisplayState::Loading => Style::default().fg(Color::Yellow),
        DisplayState::Error(_) => Style::default().fg(Color::Red),
        _ => Style::default(),
    };
    let response = Paragraph::new(display.text())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Response "));
    frame.render_widget(response, chunks[0]);

    // Input box
    let input = Paragraph::new(state.input.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Prompt "));
    frame.render_widget(input, chunks[1]);

    // Footer: notice takes precedence over keybinds
    let footer = match &state.notice {
        Some(notice) => Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]),
    };
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
