//! Language catalog view: the list behind the profile form's language field.
//!
//! Shows the catalog sorted, with an input line at the bottom while a new
//! name is being typed. `a` starts an entry, `d` deletes the selected one;
//! every change is written back to the catalog file immediately.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::{AppState, InputContext};

/// Render the language list and (optionally) the add-entry line.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = if state.languages.is_empty() {
        vec![ListItem::new(
            "No languages defined. Press 'a' to add one.",
        )]
    } else {
        state
            .languages
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == state.languages_cursor {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name.clone()).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Programming Languages "),
    );
    frame.render_widget(list, chunks[0]);

    let input_line = if state.input == InputContext::Language {
        Line::from(vec![
            Span::raw("New language: "),
            Span::styled(
                format!("{}_", state.language_input),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Press 'a' to add a language",
            Style::default().fg(Color::Gray),
        ))
    };
    let input = Paragraph::new(input_line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);
}
