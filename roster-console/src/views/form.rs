//! Create-or-edit form view.
//!
//! Renders one row per profile field; the focused row is highlighted and
//! carries a cursor marker. Flag fields show a Yes/No toggle. The title
//! says whether the form will append a new profile or replace an existing
//! one.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppState, FORM_FIELD_ORDER, FormField};
use crate::views;

/// Render the profile form into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.form.editing_key.as_deref() {
        Some(key) => format!(" Edit: {} ", views::truncate(key, 40)),
        None => " Define Student ".to_string(),
    };

    let focused = state.form.focused();
    let mut lines: Vec<Line> = Vec::new();

    for field in FORM_FIELD_ORDER {
        let value = state.form.display_value(field);
        let is_focused = field == focused;

        let marker = if is_focused { "> " } else { "  " };
        let label_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if is_focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let shown = match field {
            // Flags render as a toggle.
            f if f.is_flag() => format!("[{value}]"),
            // The comment may span lines; show it flattened with a marker
            // where the breaks are, cursor at the end when focused.
            FormField::Comment => value.replace('\n', " \u{21b5} "),
            _ => value,
        };
        let shown = if is_focused && !field.is_flag() {
            format!("{shown}_")
        } else {
            shown
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<16}", field.label()), label_style),
            Span::styled(shown, value_style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
