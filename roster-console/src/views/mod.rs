//! View modules for each TUI tab.
//!
//! Each sub-module renders one tab of the console interface. The helpers
//! here are shared across views.

pub mod detail;
pub mod form;
pub mod languages;
pub mod roster;
pub mod search;

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Row;

use roster_db::StudentProfile;

/// Truncate a string to a maximum width, appending "..." if truncated.
///
/// Uses character count (not byte length) for correct handling of multi-byte
/// characters.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Yes/No cell text for a flag.
pub fn flag_cell(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Header row shared by the roster and search result tables.
pub fn profile_table_header() -> Row<'static> {
    Row::new(vec!["Name", "Status", "Employed", "Role", "Listed"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Column widths shared by the roster and search result tables.
pub fn profile_table_widths() -> [Constraint; 5] {
    [
        Constraint::Percentage(30),
        Constraint::Percentage(15),
        Constraint::Percentage(10),
        Constraint::Percentage(30),
        Constraint::Percentage(15),
    ]
}

/// One table row for a profile, highlighted when selected.
pub fn profile_row(profile: &StudentProfile, selected: bool) -> Row<'_> {
    let listed = match (profile.whitelisted, profile.blacklisted) {
        (true, true) => "both",
        (true, false) => "whitelist",
        (false, true) => "blacklist",
        (false, false) => "-",
    };
    let style = if selected {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Row::new(vec![
        truncate(&profile.full_name, 30),
        truncate(&profile.academic_status, 15),
        flag_cell(profile.employed).to_string(),
        truncate(&profile.preferred_role, 30),
        listed.to_string(),
    ])
    .style(style)
}
