//! Programming-language catalog for RosterDB.
//!
//! A much simpler sibling of the profile store: a newline-delimited list
//! with a one-line header, no quoting, no multi-line values, and no
//! uniqueness invariant enforced at write time. It feeds the selection
//! widgets that let a profile reference known languages. Entries are
//! trimmed, deduplicated case-insensitively, and kept sorted.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Header line of the catalog file.
pub const HEADER: &str = "Name";

/// File-backed list of known programming languages.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    /// Path of the backing file.
    path: PathBuf,
}

impl LanguageCatalog {
    /// Create a catalog over the given file path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> LanguageCatalog {
        LanguageCatalog { path: path.into() }
    }

    /// The configured backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, creating the file with its header if absent.
    ///
    /// Skips the header line and blank lines, trims each entry, drops
    /// case-insensitive duplicates (first spelling wins), and returns the
    /// result sorted case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read or created.
    pub fn load(&self) -> Result<Vec<String>, Error> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, format!("{HEADER}\n"))?;
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut seen = HashSet::new();
        let mut names: Vec<String> = contents
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| seen.insert(line.to_lowercase()))
            .map(str::to_string)
            .collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        Ok(names)
    }

    /// Overwrite the catalog with the given names: header first, then one
    /// trimmed, non-blank name per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save(&self, names: &[String]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = String::from(HEADER);
        out.push('\n');
        for name in names {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
                out.push('\n');
            }
        }
        fs::write(&self.path, out)?;
        Ok(())
    }
}
