//! Profile detail view: every field of one student, comments included.
//!
//! The comment block is rendered line by line, so multi-line faculty
//! comments read as the list they are. While a new comment is being typed,
//! an input line appears at the bottom of the panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppState, InputContext};
use crate::views;

/// Render the detail panel for the profile named in `state.detail_name`.
///
/// Shows a placeholder when no profile is selected (or the selected one was
/// deleted underneath us).
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Profile ");

    let Some(profile) = state.detail_profile() else {
        let paragraph =
            Paragraph::new("No profile selected. Open one from the Roster or Search tab.")
                .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let label_style = Style::default().fg(Color::Yellow);
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            profile.full_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Status", &profile.academic_status, label_style),
        field_line("Employed", views::flag_cell(profile.employed), label_style),
        field_line("Job details", &profile.job_details, label_style),
        field_line("Languages", &profile.languages.join(", "), label_style),
        field_line("Databases", &profile.databases.join(", "), label_style),
        field_line("Role", &profile.preferred_role, label_style),
        field_line(
            "Whitelisted",
            views::flag_cell(profile.whitelisted),
            label_style,
        ),
        field_line(
            "Blacklisted",
            views::flag_cell(profile.blacklisted),
            label_style,
        ),
        Line::from(""),
        Line::from(Span::styled("Comments:", label_style)),
    ];

    if profile.comment.trim().is_empty() {
        lines.push(Line::from("  (none)"));
    } else {
        for comment in profile.comment.lines().filter(|l| !l.trim().is_empty()) {
            lines.push(Line::from(format!("  {comment}")));
        }
    }

    if state.input == InputContext::Comment {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("New comment> ", label_style),
            Span::styled(
                format!("{}_", state.comment_input),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

/// One "Label: value" line.
fn field_line<'a>(label: &'a str, value: &str, label_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.to_string()),
    ])
}
