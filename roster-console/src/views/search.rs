//! Search view: live substring filter over the roster.
//!
//! A query line on top, the matching profiles below in the shared table
//! format. The filter matches name, status, languages, databases, and
//! preferred role, case-insensitively; an empty query lists everything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::app::AppState;
use crate::views;

/// Render the search input and result table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let query = Paragraph::new(Line::from(vec![
        Span::raw("Filter: "),
        Span::styled(
            format!("{}_", state.search_query),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Search "));
    frame.render_widget(query, chunks[0]);

    let results = state.search_results();
    let rows: Vec<Row> = if results.is_empty() {
        vec![Row::new(vec!["No matching profiles", "", "", "", ""])]
    } else {
        results
            .iter()
            .enumerate()
            .map(|(i, p)| views::profile_row(*p, i == state.search_cursor))
            .collect()
    };

    let title = format!(" {} match(es) ", results.len());
    let table = Table::new(rows, views::profile_table_widths())
        .header(views::profile_table_header())
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, chunks[1]);
}
