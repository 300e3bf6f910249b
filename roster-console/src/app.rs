//! Application state and input handling for the TUI.
//!
//! Defines the core [`AppState`] struct that holds all mutable UI state, the
//! [`Tab`] enum for navigation, and the [`Action`] enum for user-triggered
//! actions. Key events are mapped to actions via [`handle_key_event`].
//!
//! This module performs no I/O. Actions that need the store push a
//! [`StoreCommand`] onto [`AppState::pending`]; the event loop in `main`
//! drains the queue, runs the synchronous store calls, and reports results
//! back through [`AppState::status`]. On a store error the form and input
//! buffers are left untouched so the user can correct and retry.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_db::profile::{join_list, split_list};
use roster_db::{StudentProfile, normalize_key};

/// Which tab the user is currently viewing.
///
/// Tabs are ordered left-to-right in the tab bar. Each variant corresponds
/// to a distinct view with its own rendering and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Lists every stored profile.
    Roster,
    /// Shows all fields of one selected profile, comments included.
    Detail,
    /// Create-or-edit form for a single profile.
    Form,
    /// Substring filter over the roster.
    Search,
    /// The programming-language catalog.
    Languages,
}

/// All possible tabs in display order, used for Tab/Shift-Tab cycling.
pub const TAB_ORDER: [Tab; 5] = [
    Tab::Roster,
    Tab::Detail,
    Tab::Form,
    Tab::Search,
    Tab::Languages,
];

impl Tab {
    /// Returns the next tab in the cycle (wraps around).
    pub fn next(self) -> Tab {
        let idx = TAB_ORDER
            .iter()
            .position(|&t| t == self)
            .expect("tab in order");
        TAB_ORDER[(idx + 1) % TAB_ORDER.len()]
    }

    /// Returns the previous tab in the cycle (wraps around).
    pub fn prev(self) -> Tab {
        let idx = TAB_ORDER
            .iter()
            .position(|&t| t == self)
            .expect("tab in order");
        TAB_ORDER[(idx + TAB_ORDER.len() - 1) % TAB_ORDER.len()]
    }

    /// Returns the tab label for display in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Roster => "Roster",
            Tab::Detail => "Profile",
            Tab::Form => "Define",
            Tab::Search => "Search",
            Tab::Languages => "Languages",
        }
    }
}

/// Which text input currently owns the keyboard, if any.
///
/// In `Browse` the navigation keys (`q`, `j`/`k`, tab digits, ...) are
/// live; in every other context printable characters go into the matching
/// buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// No input focused; navigation keys are live.
    Browse,
    /// The profile form owns input.
    Form,
    /// The search query line owns input.
    Search,
    /// The new-language line owns input.
    Language,
    /// The new-comment line owns input.
    Comment,
}

/// Fields of the profile form, in display and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    AcademicStatus,
    Employed,
    JobDetails,
    Languages,
    Databases,
    PreferredRole,
    Comment,
    Whitelisted,
    Blacklisted,
}

/// Focus/display order of the form fields.
pub const FORM_FIELD_ORDER: [FormField; 10] = [
    FormField::FullName,
    FormField::AcademicStatus,
    FormField::Employed,
    FormField::JobDetails,
    FormField::Languages,
    FormField::Databases,
    FormField::PreferredRole,
    FormField::Comment,
    FormField::Whitelisted,
    FormField::Blacklisted,
];

impl FormField {
    /// Human-readable label for the form row.
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::AcademicStatus => "Academic status",
            FormField::Employed => "Employed",
            FormField::JobDetails => "Job details",
            FormField::Languages => "Languages",
            FormField::Databases => "Databases",
            FormField::PreferredRole => "Preferred role",
            FormField::Comment => "Comment",
            FormField::Whitelisted => "Whitelisted",
            FormField::Blacklisted => "Blacklisted",
        }
    }

    /// True for Yes/No toggle fields (Space toggles, typing is ignored).
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            FormField::Employed | FormField::Whitelisted | FormField::Blacklisted
        )
    }
}

/// Editable state of the profile form.
///
/// List fields are held as raw text while editing (split only on save), so
/// the user can type separators freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub academic_status: String,
    pub employed: bool,
    pub job_details: String,
    pub languages: String,
    pub databases: String,
    pub preferred_role: String,
    pub comment: String,
    pub whitelisted: bool,
    pub blacklisted: bool,
    /// Index into [`FORM_FIELD_ORDER`] of the focused row.
    pub focus: usize,
    /// `Some(original name)` when editing an existing profile; the name is
    /// the store key to update, even if the form renames the student.
    pub editing_key: Option<String>,
}

impl FormState {
    /// Pre-fill the form from an existing profile for editing.
    pub fn from_profile(profile: &StudentProfile) -> FormState {
        FormState {
            full_name: profile.full_name.clone(),
            academic_status: profile.academic_status.clone(),
            employed: profile.employed,
            job_details: profile.job_details.clone(),
            languages: join_list(&profile.languages),
            databases: join_list(&profile.databases),
            preferred_role: profile.preferred_role.clone(),
            comment: profile.comment.clone(),
            whitelisted: profile.whitelisted,
            blacklisted: profile.blacklisted,
            focus: 0,
            editing_key: Some(profile.full_name.clone()),
        }
    }

    /// Convert the form contents into a profile, splitting the list fields.
    pub fn to_profile(&self) -> StudentProfile {
        StudentProfile {
            full_name: self.full_name.trim().to_string(),
            academic_status: self.academic_status.trim().to_string(),
            employed: self.employed,
            job_details: self.job_details.trim().to_string(),
            languages: split_list(&self.languages),
            databases: split_list(&self.databases),
            preferred_role: self.preferred_role.trim().to_string(),
            comment: self.comment.clone(),
            whitelisted: self.whitelisted,
            blacklisted: self.blacklisted,
        }
    }

    /// The currently focused field.
    pub fn focused(&self) -> FormField {
        FORM_FIELD_ORDER[self.focus]
    }

    /// Move focus to the next field (wraps).
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FORM_FIELD_ORDER.len();
    }

    /// Move focus to the previous field (wraps).
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FORM_FIELD_ORDER.len() - 1) % FORM_FIELD_ORDER.len();
    }

    /// Display value for a field (flags render as Yes/No).
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::FullName => self.full_name.clone(),
            FormField::AcademicStatus => self.academic_status.clone(),
            FormField::Employed => flag_text(self.employed),
            FormField::JobDetails => self.job_details.clone(),
            FormField::Languages => self.languages.clone(),
            FormField::Databases => self.databases.clone(),
            FormField::PreferredRole => self.preferred_role.clone(),
            FormField::Comment => self.comment.clone(),
            FormField::Whitelisted => flag_text(self.whitelisted),
            FormField::Blacklisted => flag_text(self.blacklisted),
        }
    }

    /// Mutable text buffer of the focused field, or `None` for flags.
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::FullName => Some(&mut self.full_name),
            FormField::AcademicStatus => Some(&mut self.academic_status),
            FormField::JobDetails => Some(&mut self.job_details),
            FormField::Languages => Some(&mut self.languages),
            FormField::Databases => Some(&mut self.databases),
            FormField::PreferredRole => Some(&mut self.preferred_role),
            FormField::Comment => Some(&mut self.comment),
            FormField::Employed | FormField::Whitelisted | FormField::Blacklisted => None,
        }
    }

    /// Toggle the focused field if it is a flag.
    fn toggle_focused_flag(&mut self) {
        match self.focused() {
            FormField::Employed => self.employed = !self.employed,
            FormField::Whitelisted => self.whitelisted = !self.whitelisted,
            FormField::Blacklisted => self.blacklisted = !self.blacklisted,
            _ => {}
        }
    }
}

/// Yes/No label for a flag value.
pub fn flag_text(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// A store operation requested by the UI, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    /// Re-read the roster and the language catalog from disk.
    Reload,
    /// Append a new profile.
    SaveNew(StudentProfile),
    /// Replace the profile stored under `key` with `profile`.
    Replace { key: String, profile: StudentProfile },
    /// Delete the profile stored under `key`.
    Delete { key: String },
    /// Overwrite the language catalog.
    SaveLanguages(Vec<String>),
    /// Append a dated comment line to the profile stored under `key`.
    AddComment { key: String, text: String },
}

/// Actions that the UI can trigger in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Switch to a specific tab.
    SwitchTab(Tab),
    /// Move cursor up in the current list.
    CursorUp,
    /// Move cursor down in the current list.
    CursorDown,
    /// Activate the selected item (Enter on a list).
    Select,
    /// Reload data from disk.
    Refresh,
    /// Start a new profile (Roster) or a new language entry (Languages).
    New,
    /// Open the form pre-filled with the selected profile.
    EditSelected,
    /// Delete the selected profile or language.
    DeleteSelected,
    /// Begin typing a new comment for the shown profile.
    StartComment,
    /// A printable character for the focused input.
    Input(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Context-dependent Enter (next field / add entry / save comment).
    Enter,
    /// Leave the focused input without applying it.
    Cancel,
    /// Save the form (Ctrl+S).
    Submit,
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
}

/// The full mutable state of the TUI application.
///
/// All rendering reads from this struct; all input handling mutates it.
/// The render loop and event loop share a single instance.
#[derive(Debug)]
pub struct AppState {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Which input owns the keyboard.
    pub input: InputContext,
    /// One-line status or error message for the status bar.
    pub status: Option<String>,
    /// Data file path for display in the status bar.
    pub data_path: String,
    /// Store operations awaiting execution by the event loop.
    pub pending: VecDeque<StoreCommand>,

    // -- Roster tab --
    /// Profiles as last loaded from disk, in file order.
    pub roster: Vec<StudentProfile>,
    /// Selected index in the roster list.
    pub roster_cursor: usize,

    // -- Detail tab --
    /// Name of the profile shown in the detail tab.
    pub detail_name: Option<String>,
    /// In-progress comment text while [`InputContext::Comment`] is active.
    pub comment_input: String,

    // -- Form tab --
    /// The create-or-edit form.
    pub form: FormState,

    // -- Search tab --
    /// Live substring query.
    pub search_query: String,
    /// Selected index within the filtered results.
    pub search_cursor: usize,

    // -- Languages tab --
    /// Catalog entries as last loaded, sorted.
    pub languages: Vec<String>,
    /// Selected index in the language list.
    pub languages_cursor: usize,
    /// In-progress language name while [`InputContext::Language`] is active.
    pub language_input: String,
}

impl AppState {
    /// Create a new `AppState` with default values.
    ///
    /// # Arguments
    ///
    /// * `data_path` - The profile file path string for status bar display.
    pub fn new(data_path: String) -> Self {
        Self {
            active_tab: Tab::Roster,
            should_quit: false,
            input: InputContext::Browse,
            status: None,
            data_path,
            pending: VecDeque::new(),
            roster: Vec::new(),
            roster_cursor: 0,
            detail_name: None,
            comment_input: String::new(),
            form: FormState::default(),
            search_query: String::new(),
            search_cursor: 0,
            languages: Vec::new(),
            languages_cursor: 0,
            language_input: String::new(),
        }
    }

    /// The profile under the roster cursor, if any.
    pub fn selected_profile(&self) -> Option<&StudentProfile> {
        self.roster.get(self.roster_cursor)
    }

    /// The profile shown in the detail tab, looked up by normalized name.
    pub fn detail_profile(&self) -> Option<&StudentProfile> {
        let name = self.detail_name.as_deref()?;
        let normalized = normalize_key(name);
        self.roster
            .iter()
            .find(|p| normalize_key(&p.full_name) == normalized)
    }

    /// Roster entries matching the current search query.
    ///
    /// Case-insensitive substring match over name, status, languages,
    /// databases, and preferred role; an empty query matches everything.
    pub fn search_results(&self) -> Vec<&StudentProfile> {
        let query = self.search_query.trim().to_lowercase();
        self.roster
            .iter()
            .filter(|p| {
                if query.is_empty() {
                    return true;
                }
                p.full_name.to_lowercase().contains(&query)
                    || p.academic_status.to_lowercase().contains(&query)
                    || p.languages.join("; ").to_lowercase().contains(&query)
                    || p.databases.join("; ").to_lowercase().contains(&query)
                    || p.preferred_role.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Returns the number of items in the current tab's list for cursor bounds.
    fn current_list_len(&self) -> usize {
        match self.active_tab {
            Tab::Roster => self.roster.len(),
            Tab::Search => self.search_results().len(),
            Tab::Languages => self.languages.len(),
            Tab::Detail | Tab::Form => 0,
        }
    }

    /// Returns a mutable reference to the current tab's cursor, if it has one.
    fn current_cursor_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            Tab::Roster => Some(&mut self.roster_cursor),
            Tab::Search => Some(&mut self.search_cursor),
            Tab::Languages => Some(&mut self.languages_cursor),
            Tab::Detail | Tab::Form => None,
        }
    }

    /// Apply an [`Action`] to mutate the application state.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchTab(tab) => self.switch_tab(tab),
            Action::CursorUp => {
                if let Some(cursor) = self.current_cursor_mut() {
                    *cursor = cursor.saturating_sub(1);
                }
            }
            Action::CursorDown => {
                let len = self.current_list_len();
                if let Some(cursor) = self.current_cursor_mut()
                    && len > 0
                {
                    *cursor = (*cursor + 1).min(len - 1);
                }
            }
            Action::Select => self.select(),
            Action::Refresh => self.pending.push_back(StoreCommand::Reload),
            Action::New => match self.active_tab {
                Tab::Languages => {
                    self.language_input.clear();
                    self.input = InputContext::Language;
                }
                _ => {
                    self.form = FormState::default();
                    self.switch_tab(Tab::Form);
                }
            },
            Action::EditSelected => {
                let profile = match self.active_tab {
                    Tab::Detail => self.detail_profile().cloned(),
                    _ => self.selected_profile().cloned(),
                };
                if let Some(profile) = profile {
                    self.form = FormState::from_profile(&profile);
                    self.switch_tab(Tab::Form);
                }
            }
            Action::DeleteSelected => match self.active_tab {
                Tab::Roster => {
                    if let Some(key) = self.selected_profile().map(|p| p.full_name.clone()) {
                        self.pending.push_back(StoreCommand::Delete { key });
                    }
                }
                Tab::Languages => {
                    if self.languages_cursor < self.languages.len() {
                        self.languages.remove(self.languages_cursor);
                        if self.languages_cursor >= self.languages.len() {
                            self.languages_cursor = self.languages.len().saturating_sub(1);
                        }
                        self.pending
                            .push_back(StoreCommand::SaveLanguages(self.languages.clone()));
                    }
                }
                _ => {}
            },
            Action::StartComment => {
                if self.active_tab == Tab::Detail && self.detail_profile().is_some() {
                    self.comment_input.clear();
                    self.input = InputContext::Comment;
                }
            }
            Action::Input(c) => self.insert_char(c),
            Action::Backspace => self.backspace(),
            Action::Enter => self.enter(),
            Action::Cancel => self.cancel(),
            Action::Submit => self.submit_form(),
            Action::NextField => {
                if self.input == InputContext::Form {
                    self.form.focus_next();
                }
            }
            Action::PrevField => {
                if self.input == InputContext::Form {
                    self.form.focus_prev();
                }
            }
        }
    }

    /// Switch tabs, handing keyboard focus to the tab's input when it has one.
    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.input = match tab {
            Tab::Form => InputContext::Form,
            Tab::Search => InputContext::Search,
            _ => InputContext::Browse,
        };
    }

    /// Enter on a list: open the detail view for the selected profile.
    fn select(&mut self) {
        let name = match self.active_tab {
            Tab::Roster => self.selected_profile().map(|p| p.full_name.clone()),
            Tab::Search => {
                let results = self.search_results();
                results.get(self.search_cursor).map(|p| p.full_name.clone())
            }
            _ => None,
        };
        if let Some(name) = name {
            self.detail_name = Some(name);
            self.switch_tab(Tab::Detail);
        }
    }

    /// Route a typed character to the focused input.
    fn insert_char(&mut self, c: char) {
        match self.input {
            InputContext::Form => {
                if self.form.focused().is_flag() {
                    if c == ' ' {
                        self.form.toggle_focused_flag();
                    }
                } else if let Some(text) = self.form.focused_text_mut() {
                    text.push(c);
                }
            }
            InputContext::Search => {
                self.search_query.push(c);
                self.search_cursor = 0;
            }
            InputContext::Language => self.language_input.push(c),
            InputContext::Comment => self.comment_input.push(c),
            InputContext::Browse => {}
        }
    }

    /// Delete the last character of the focused input.
    fn backspace(&mut self) {
        match self.input {
            InputContext::Form => {
                if let Some(text) = self.form.focused_text_mut() {
                    text.pop();
                }
            }
            InputContext::Search => {
                self.search_query.pop();
                self.search_cursor = 0;
            }
            InputContext::Language => {
                self.language_input.pop();
            }
            InputContext::Comment => {
                self.comment_input.pop();
            }
            InputContext::Browse => {}
        }
    }

    /// Context-dependent Enter.
    fn enter(&mut self) {
        match self.input {
            InputContext::Form => {
                // Enter inserts a line break in the multi-line comment field
                // and advances focus everywhere else.
                if self.form.focused() == FormField::Comment {
                    self.form.comment.push('\n');
                } else {
                    self.form.focus_next();
                }
            }
            InputContext::Search => self.select(),
            InputContext::Language => self.add_language(),
            InputContext::Comment => self.save_comment(),
            InputContext::Browse => {}
        }
    }

    /// Leave the focused input without applying it.
    fn cancel(&mut self) {
        match self.input {
            InputContext::Form | InputContext::Search => self.switch_tab(Tab::Roster),
            InputContext::Language | InputContext::Comment => {
                self.input = InputContext::Browse;
            }
            InputContext::Browse => {}
        }
    }

    /// Validate and queue the language being typed.
    fn add_language(&mut self) {
        let trimmed = self.language_input.trim().to_string();
        if trimmed.is_empty() {
            self.status = Some("Language name required.".to_string());
            return;
        }
        let key = trimmed.to_lowercase();
        if self.languages.iter().any(|l| l.to_lowercase() == key) {
            self.status = Some("Language already exists.".to_string());
            return;
        }
        self.languages.push(trimmed);
        self.languages
            .sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        self.language_input.clear();
        self.status = None;
        self.pending
            .push_back(StoreCommand::SaveLanguages(self.languages.clone()));
    }

    /// Validate and queue the comment being typed.
    fn save_comment(&mut self) {
        let text = self.comment_input.trim().to_string();
        if text.is_empty() {
            self.status = Some("Enter a comment before saving.".to_string());
            return;
        }
        let Some(name) = self.detail_name.clone() else {
            self.input = InputContext::Browse;
            return;
        };
        self.pending
            .push_back(StoreCommand::AddComment { key: name, text });
        self.comment_input.clear();
        self.input = InputContext::Browse;
    }

    /// Validate and queue the form (Ctrl+S).
    fn submit_form(&mut self) {
        if self.input != InputContext::Form {
            return;
        }
        let profile = self.form.to_profile();
        if profile.full_name.is_empty() {
            self.status = Some("Please enter the student's name.".to_string());
            return;
        }
        let command = match self.form.editing_key.clone() {
            Some(key) => StoreCommand::Replace { key, profile },
            None => StoreCommand::SaveNew(profile),
        };
        self.pending.push_back(command);
    }
}

/// Append a dated comment line to an existing comment block.
///
/// Format matches what the detail view expects: one `[date] text` entry per
/// line. A blank existing block yields just the new entry.
pub fn stamp_comment(existing: &str, text: &str, date: &str) -> String {
    let stamped = format!("[{date}] {text}");
    if existing.trim().is_empty() {
        stamped
    } else {
        format!("{existing}\n{stamped}")
    }
}

/// Map a crossterm [`KeyEvent`] to an [`Action`], if applicable.
///
/// Returns `None` for keys that have no mapped action in the given context.
///
/// # Key Bindings (browse context)
///
/// | Key             | Action                          |
/// |-----------------|---------------------------------|
/// | `q` / `Esc`     | Quit                            |
/// | `1`-`5`         | Switch to tab 1-5               |
/// | `Tab`/`BackTab` | Next / previous tab             |
/// | `j`/`k`, arrows | Cursor down / up                |
/// | `Enter`         | Select                          |
/// | `r`             | Refresh                         |
/// | `n` / `a`       | New profile / language          |
/// | `e`             | Edit selected                   |
/// | `d`             | Delete selected                 |
/// | `c`             | Add comment (detail tab)        |
///
/// While an input owns the keyboard, printable keys type into it, `Esc`
/// cancels, `Enter` is context-dependent, and on the form `Tab`/arrows move
/// between fields and `Ctrl+S` saves. `Ctrl+C` always quits.
pub fn handle_key_event(key: KeyEvent, tab: Tab, ctx: InputContext) -> Option<Action> {
    // Ctrl+C quits from any context.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match ctx {
        InputContext::Form => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Submit)
            }
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        InputContext::Search => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Tab => Some(Action::SwitchTab(tab.next())),
            KeyCode::BackTab => Some(Action::SwitchTab(tab.prev())),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        InputContext::Language | InputContext::Comment => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        InputContext::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('1') => Some(Action::SwitchTab(Tab::Roster)),
            KeyCode::Char('2') => Some(Action::SwitchTab(Tab::Detail)),
            KeyCode::Char('3') => Some(Action::SwitchTab(Tab::Form)),
            KeyCode::Char('4') => Some(Action::SwitchTab(Tab::Search)),
            KeyCode::Char('5') => Some(Action::SwitchTab(Tab::Languages)),
            KeyCode::Tab => Some(Action::SwitchTab(tab.next())),
            KeyCode::BackTab => Some(Action::SwitchTab(tab.prev())),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('n') | KeyCode::Char('a') => Some(Action::New),
            KeyCode::Char('e') => Some(Action::EditSelected),
            KeyCode::Char('d') => Some(Action::DeleteSelected),
            KeyCode::Char('c') => Some(Action::StartComment),
            _ => None,
        },
    }
}
