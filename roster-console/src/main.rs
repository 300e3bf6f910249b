//! RosterDB interactive TUI console.
//!
//! Opens a profile CSV file and its language catalog directly and provides
//! an interactive terminal interface for browsing, defining, editing,
//! searching, and commenting on student profiles.
//!
//! # Usage
//!
//! ```text
//! roster-console [--data <FILE>] [--languages <FILE>]
//! ```
//!
//! Both paths default to the conventional file names in the working
//! directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, poll};
use roster_db::{LanguageCatalog, ProfileStore, StudentProfile};

use roster_console::app::{self, AppState, FormState, InputContext, StoreCommand, Tab};
use roster_console::tui;

/// Interactive TUI console for a RosterDB profile file.
#[derive(Parser, Debug)]
#[command(name = "roster-console", version, about)]
struct Cli {
    /// Path to the profile CSV file.
    #[arg(long, default_value = "Students.csv")]
    data: PathBuf,

    /// Path to the language catalog file.
    #[arg(long, default_value = "ProgrammingLanguage.csv")]
    languages: PathBuf,
}

/// Tick interval for the event loop (approximately 30 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Initialize tracing (respects RUST_LOG env var).
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // Open the store and catalog; fail fast before touching the terminal.
    let store = ProfileStore::new(&cli.data);
    let catalog = LanguageCatalog::new(&cli.languages);
    store
        .ensure_initialized()
        .context("Failed to open profile store")?;

    // Initialize the terminal.
    let mut terminal = tui::init_terminal().context("Failed to initialize terminal")?;

    // Set up a panic hook that restores the terminal before printing the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = tui::restore_terminal();
        original_hook(info);
    }));

    // Initialize application state and trigger the first load.
    let mut state = AppState::new(cli.data.display().to_string());
    state.pending.push_back(StoreCommand::Reload);

    // Main event loop.
    let result = run_event_loop(&mut terminal, &mut state, &store, &catalog);

    // Restore the terminal regardless of success or failure.
    tui::restore_terminal().context("Failed to restore terminal")?;

    result
}

/// Main event loop: executes queued store commands, renders, and polls for
/// key events. Runs until `state.should_quit` is set to `true`.
fn run_event_loop(
    terminal: &mut tui::Term,
    state: &mut AppState,
    store: &ProfileStore,
    catalog: &LanguageCatalog,
) -> Result<()> {
    loop {
        // 1. Run any store operations the last actions queued.
        handle_store_commands(state, store, catalog);

        // 2. Render the current state.
        tui::render(terminal, state)?;

        // 3. Poll for key events (non-blocking with tick timeout).
        if poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = app::handle_key_event(key, state.active_tab, state.input)
            {
                state.apply_action(action);
            }
        }

        // 4. Check if we should quit.
        if state.should_quit {
            return Ok(());
        }
    }
}

/// Execute queued [`StoreCommand`]s against the store and catalog.
///
/// Every call is synchronous; results land in `state.status`. On a store
/// error the form and input buffers are left exactly as they were, so the
/// user can fix the input and retry.
fn handle_store_commands(state: &mut AppState, store: &ProfileStore, catalog: &LanguageCatalog) {
    while let Some(command) = state.pending.pop_front() {
        match command {
            StoreCommand::Reload => reload(state, store, catalog),
            StoreCommand::SaveNew(profile) => {
                let name = profile.full_name.clone();
                match store.append(&profile.to_record()) {
                    Ok(()) => {
                        state.status = Some(format!("Saved {name}"));
                        finish_form(state);
                    }
                    Err(e) => state.status = Some(e.to_string()),
                }
            }
            StoreCommand::Replace { key, profile } => {
                let name = profile.full_name.clone();
                match store.update_by_key(&key, &profile.to_record()) {
                    Ok(()) => {
                        state.status = Some(format!("Updated {name}"));
                        finish_form(state);
                    }
                    Err(e) => state.status = Some(e.to_string()),
                }
            }
            StoreCommand::Delete { key } => match store.delete_by_key(&key) {
                Ok(()) => {
                    state.status = Some(format!("Deleted {key}"));
                    state.pending.push_back(StoreCommand::Reload);
                }
                Err(e) => state.status = Some(e.to_string()),
            },
            StoreCommand::SaveLanguages(names) => {
                if let Err(e) = catalog.save(&names) {
                    state.status = Some(e.to_string());
                }
            }
            StoreCommand::AddComment { key, text } => add_comment(state, store, &key, &text),
        }
    }
}

/// Clear the form and return to the roster after a successful save.
fn finish_form(state: &mut AppState) {
    state.form = FormState::default();
    state.active_tab = Tab::Roster;
    state.input = InputContext::Browse;
    state.pending.push_back(StoreCommand::Reload);
}

/// Append a dated comment to the stored profile under `key`.
fn add_comment(state: &mut AppState, store: &ProfileStore, key: &str, text: &str) {
    let normalized = roster_db::normalize_key(key);
    let Some(profile) = state
        .roster
        .iter()
        .find(|p| roster_db::normalize_key(&p.full_name) == normalized)
    else {
        state.status = Some(format!("profile not found: {key:?}"));
        return;
    };

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut updated = profile.clone();
    updated.comment = app::stamp_comment(&profile.comment, text, &date);

    match store.update_by_key(key, &updated.to_record()) {
        Ok(()) => {
            state.status = Some("Comment saved".to_string());
            state.pending.push_back(StoreCommand::Reload);
        }
        Err(e) => state.status = Some(e.to_string()),
    }
}

/// Re-read the roster and language catalog from disk, clamping cursors to
/// the new list lengths. Rows too short for the schema are skipped with a
/// warning rather than silently coerced.
fn reload(state: &mut AppState, store: &ProfileStore, catalog: &LanguageCatalog) {
    match store.read_all() {
        Ok(records) => {
            let mut roster = Vec::with_capacity(records.len());
            for record in &records {
                match StudentProfile::from_record(record) {
                    Ok(profile) => roster.push(profile),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping undersized record");
                    }
                }
            }
            state.roster = roster;
            state.roster_cursor = state
                .roster_cursor
                .min(state.roster.len().saturating_sub(1));
            state.search_cursor = 0;
        }
        Err(e) => state.status = Some(e.to_string()),
    }

    match catalog.load() {
        Ok(languages) => {
            state.languages = languages;
            state.languages_cursor = state
                .languages_cursor
                .min(state.languages.len().saturating_sub(1));
        }
        Err(e) => state.status = Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: state plus store/catalog over a fresh tempdir.
    fn temp_setup() -> (tempfile::TempDir, AppState, ProfileStore, LanguageCatalog) {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = ProfileStore::new(dir.path().join("Students.csv"));
        let catalog = LanguageCatalog::new(dir.path().join("ProgrammingLanguage.csv"));
        let state = AppState::new("Students.csv".to_string());
        (dir, state, store, catalog)
    }

    fn profile(name: &str) -> StudentProfile {
        StudentProfile {
            full_name: name.to_string(),
            academic_status: "Senior".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn save_new_persists_and_returns_to_roster() {
        let (_dir, mut state, store, catalog) = temp_setup();
        state.active_tab = Tab::Form;
        state.input = InputContext::Form;
        state.pending
            .push_back(StoreCommand::SaveNew(profile("Ada Lovelace")));

        handle_store_commands(&mut state, &store, &catalog);

        assert_eq!(state.active_tab, Tab::Roster);
        assert_eq!(state.roster.len(), 1);
        assert_eq!(state.roster[0].full_name, "Ada Lovelace");
        assert_eq!(state.status.as_deref(), Some("Saved Ada Lovelace"));
    }

    #[test]
    fn duplicate_save_reports_error_and_keeps_form() {
        let (_dir, mut state, store, catalog) = temp_setup();
        store
            .append(&profile("Ada Lovelace").to_record())
            .expect("seed append");

        state.active_tab = Tab::Form;
        state.input = InputContext::Form;
        state.form.full_name = "ada lovelace".to_string();
        state.pending
            .push_back(StoreCommand::SaveNew(profile("ada lovelace")));

        handle_store_commands(&mut state, &store, &catalog);

        // Error surfaced; the form state was not cleared.
        assert!(
            state.status.as_deref().is_some_and(|s| s.contains("duplicate key")),
            "got: {:?}",
            state.status
        );
        assert_eq!(state.active_tab, Tab::Form);
        assert_eq!(state.form.full_name, "ada lovelace");
    }

    #[test]
    fn replace_updates_under_the_original_key() {
        let (_dir, mut state, store, catalog) = temp_setup();
        store
            .append(&profile("Ada Lovelace").to_record())
            .expect("seed append");

        state.pending.push_back(StoreCommand::Replace {
            key: "Ada Lovelace".to_string(),
            profile: profile("Ada King"),
        });
        handle_store_commands(&mut state, &store, &catalog);

        assert_eq!(state.roster.len(), 1);
        assert_eq!(state.roster[0].full_name, "Ada King");
    }

    #[test]
    fn delete_reports_missing_key() {
        let (_dir, mut state, store, catalog) = temp_setup();
        state.pending.push_back(StoreCommand::Delete {
            key: "Grace Hopper".to_string(),
        });
        handle_store_commands(&mut state, &store, &catalog);

        assert!(
            state.status.as_deref().is_some_and(|s| s.contains("not found")),
            "got: {:?}",
            state.status
        );
    }

    #[test]
    fn add_comment_stamps_and_persists() {
        let (_dir, mut state, store, catalog) = temp_setup();
        store
            .append(&profile("Ada Lovelace").to_record())
            .expect("seed append");
        state.pending.push_back(StoreCommand::Reload);
        handle_store_commands(&mut state, &store, &catalog);

        state.pending.push_back(StoreCommand::AddComment {
            key: "Ada Lovelace".to_string(),
            text: "solid work".to_string(),
        });
        handle_store_commands(&mut state, &store, &catalog);

        assert_eq!(state.roster.len(), 1);
        let comment = &state.roster[0].comment;
        assert!(
            comment.starts_with('[') && comment.ends_with("] solid work"),
            "expected a dated stamp, got: {comment:?}"
        );
    }

    #[test]
    fn save_languages_persists_catalog() {
        let (_dir, mut state, store, catalog) = temp_setup();
        state.pending.push_back(StoreCommand::SaveLanguages(vec![
            "Python".to_string(),
            "Rust".to_string(),
        ]));
        handle_store_commands(&mut state, &store, &catalog);

        assert_eq!(
            catalog.load().expect("catalog load"),
            vec!["Python", "Rust"]
        );
    }

    #[test]
    fn reload_skips_undersized_records() {
        let (_dir, mut state, store, catalog) = temp_setup();
        store.ensure_initialized().expect("init");
        // Seed one good record and one hand-written short row.
        store
            .append(&profile("Ada Lovelace").to_record())
            .expect("append");
        {
            use std::io::Write;
            let mut file = std::fs::OpenOptions::new()
                .append(true)
                .open(store.path())
                .expect("open");
            file.write_all(b"\"Orphan\",\"only two fields\"\n")
                .expect("write");
        }

        state.pending.push_back(StoreCommand::Reload);
        handle_store_commands(&mut state, &store, &catalog);

        assert_eq!(state.roster.len(), 1);
        assert_eq!(state.roster[0].full_name, "Ada Lovelace");
    }

    #[test]
    fn reload_clamps_cursors() {
        let (_dir, mut state, store, catalog) = temp_setup();
        store
            .append(&profile("Ada Lovelace").to_record())
            .expect("append");
        state.roster_cursor = 7;
        state.languages_cursor = 7;

        state.pending.push_back(StoreCommand::Reload);
        handle_store_commands(&mut state, &store, &catalog);

        assert_eq!(state.roster_cursor, 0);
        assert_eq!(state.languages_cursor, 0);
    }

    #[test]
    fn cli_parses_custom_paths() {
        let cli = Cli::try_parse_from([
            "roster-console",
            "--data",
            "/tmp/r/Students.csv",
            "--languages",
            "/tmp/r/Langs.csv",
        ])
        .expect("should parse");
        assert_eq!(cli.data, PathBuf::from("/tmp/r/Students.csv"));
        assert_eq!(cli.languages, PathBuf::from("/tmp/r/Langs.csv"));
    }

    #[test]
    fn cli_defaults_to_conventional_file_names() {
        let cli = Cli::try_parse_from(["roster-console"]).expect("should parse");
        assert_eq!(cli.data, PathBuf::from("Students.csv"));
        assert_eq!(cli.languages, PathBuf::from("ProgrammingLanguage.csv"));
    }
}
