//! Roster list view: table of every stored profile.
//!
//! Renders a table with one row per profile. Supports cursor navigation,
//! Enter-to-open, `e` to edit, and `d` to delete.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Row, Table};

use crate::app::AppState;
use crate::views;

/// Render the roster table into the given area.
///
/// The currently selected row is highlighted. If the store holds no
/// profiles, shows a hint for creating one.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows: Vec<Row> = if state.roster.is_empty() {
        vec![Row::new(vec![
            "No profiles yet. Press 'n' to define one.",
            "",
            "",
            "",
            "",
        ])]
    } else {
        state
            .roster
            .iter()
            .enumerate()
            .map(|(i, p)| views::profile_row(p, i == state.roster_cursor))
            .collect()
    };

    let table = Table::new(rows, views::profile_table_widths())
        .header(views::profile_table_header())
        .block(Block::default().borders(Borders::ALL).title(" Roster "));

    frame.render_widget(table, area);
}
