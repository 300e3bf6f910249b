//! Terminal initialization, restoration, and render loop.
//!
//! Provides functions to set up the crossterm backend for ratatui, restore
//! the terminal on exit, and the main render function that draws the TUI
//! layout.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::app::{AppState, InputContext, TAB_ORDER, Tab};
use crate::views;

/// Terminal type alias using the crossterm backend over stdout.
pub type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Initialize the terminal: enable raw mode, enter alternate screen,
/// and create the ratatui terminal.
///
/// # Errors
///
/// Returns `io::Error` if terminal setup fails.
pub fn init_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal: disable raw mode and leave alternate screen.
///
/// This should be called on exit (including panic paths) to avoid leaving
/// the terminal in a broken state.
///
/// # Errors
///
/// Returns `io::Error` if terminal restoration fails.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Render the full TUI layout to the terminal.
///
/// Layout:
/// ```text
/// +--[ Roster ]--[ Profile ]--[ Define ]--[ Search ]--[ Languages ]--+
/// |                                                                  |
/// |                        Main content area                         |
/// |                                                                  |
/// +------------------------------------------------------------------+
/// | Status bar                                                       |
/// +------------------------------------------------------------------+
/// ```
///
/// # Errors
///
/// Returns `io::Error` if drawing fails.
pub fn render(terminal: &mut Term, state: &AppState) -> io::Result<()> {
    terminal.draw(|frame| {
        let size = frame.area();

        // Split into: tabs bar (3 lines), content area, status bar (1 line).
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        render_tabs(frame, chunks[0], state);
        render_content(frame, chunks[1], state);
        render_status_bar(frame, chunks[2], state);
    })?;
    Ok(())
}

/// Render the tab bar at the top of the screen.
fn render_tabs(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = TAB_ORDER
        .iter()
        .map(|t| {
            let style = if *t == state.active_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.label(), style))
        })
        .collect();

    let selected = TAB_ORDER
        .iter()
        .position(|&t| t == state.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the main content area based on the active tab.
fn render_content(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    match state.active_tab {
        Tab::Roster => views::roster::render(frame, area, state),
        Tab::Detail => views::detail::render(frame, area, state),
        Tab::Form => views::form::render(frame, area, state),
        Tab::Search => views::search::render(frame, area, state),
        Tab::Languages => views::languages::render(frame, area, state),
    }
}

/// Key hint line for the current tab and input context.
fn key_hints(state: &AppState) -> &'static str {
    match state.input {
        InputContext::Form => "Tab/arrows:field  Space:toggle  Ctrl+S:save  Esc:cancel",
        InputContext::Search => "type to filter  arrows:scroll  Enter:open  Esc:back",
        InputContext::Language => "type a name  Enter:add  Esc:done",
        InputContext::Comment => "type a comment  Enter:save  Esc:cancel",
        InputContext::Browse => match state.active_tab {
            Tab::Detail => "e:edit  c:comment  1-5:tab  q:quit",
            Tab::Languages => "a:add  d:delete  j/k:scroll  q:quit",
            _ => "1-5:tab  j/k:scroll  Enter:open  n:new  e:edit  d:delete  r:reload  q:quit",
        },
    }
}

/// Render the status bar at the bottom of the screen.
///
/// Shows the last status/error message when there is one, otherwise the
/// data file path, profile count, and key hints.
fn render_status_bar(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let (text, style) = match &state.status {
        Some(message) => (
            format!(" {message}"),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        None => (
            format!(
                " {} | {} profile(s) | {}",
                state.data_path,
                state.roster.len(),
                key_hints(state),
            ),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)));
    frame.render_widget(paragraph, area);
}
