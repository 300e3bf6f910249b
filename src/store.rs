//! Record store for RosterDB.
//!
//! This module owns the single backing CSV file. It provides append,
//! full-scan read, key-based update, and key-based delete, and enforces the
//! one invariant the file format cannot express on its own: at most one
//! record per normalized key.
//!
//! Every operation is synchronous and performs a scoped open/read-or-write/
//! close sequence; file handles are released on all exit paths, error paths
//! included. Mutations are read-modify-write over the whole file. The
//! rewrite is not crash-atomic: it truncates before writing, so an I/O
//! failure mid-rewrite can leave the file short -- callers must treat an
//! [`Error::Io`] from a mutation as "storage state unknown".

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::Error;
use crate::profile;

/// Normalize a record key for comparison.
///
/// Leading/trailing whitespace is trimmed, internal whitespace runs collapse
/// to a single space, and the result is lowercased. Two records describe the
/// same entity iff their normalized keys are equal, so `"Ada Lovelace"` and
/// `"  ada   LOVELACE "` collide.
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// File-backed store of profile records.
///
/// The backing path is explicit constructor configuration -- there is no
/// process-wide default -- so independent stores (and tests) can point at
/// independent files. The store holds no open handle and no in-memory
/// state between calls; each operation re-reads the file, which keeps a
/// single writer and any number of sequential readers trivially consistent.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    /// Path of the backing CSV file.
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store over the given file path. No I/O happens here; the
    /// file is created lazily by the first operation.
    pub fn new(path: impl Into<PathBuf>) -> ProfileStore {
        ProfileStore { path: path.into() }
    }

    /// The configured backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with its header line if it is absent or
    /// empty, creating parent directories as needed. Idempotent: an
    /// existing non-empty file is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directories or the file cannot be
    /// created.
    pub fn ensure_initialized(&self) -> Result<(), Error> {
        if let Ok(meta) = fs::metadata(&self.path)
            && meta.len() > 0
        {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", profile::HEADER))?;
        tracing::info!(path = %self.path.display(), "initialized profile store");
        Ok(())
    }

    /// Append one record to the end of the file.
    ///
    /// The record's key (first field) must be non-blank after normalization
    /// and must not collide with any stored record's normalized key; both
    /// checks run before anything is written, so on failure the file is
    /// untouched. No other record is modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the key is blank,
    /// [`Error::DuplicateKey`] if the normalized key is already stored, and
    /// [`Error::Io`] on filesystem failure.
    pub fn append(&self, record: &[String]) -> Result<(), Error> {
        self.ensure_initialized()?;

        let key = record.first().map(String::as_str).unwrap_or("");
        let normalized = normalize_key(key);
        if normalized.is_empty() {
            return Err(Error::InvalidRecord(
                "identifying name is blank".to_string(),
            ));
        }

        // Uniqueness requires a full scan; record counts are small enough
        // that this stays cheap.
        let existing = self.read_all()?;
        if existing
            .iter()
            .any(|r| r.first().is_some_and(|k| normalize_key(k) == normalized))
        {
            return Err(Error::DuplicateKey {
                key: key.to_string(),
            });
        }

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(codec::encode_row(record).as_bytes())?;
        Ok(())
    }

    /// Read every record in file order, header excluded.
    ///
    /// Does not mutate the file. A trailing row with unbalanced quotes is
    /// decoded best-effort and logged, not dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn read_all(&self) -> Result<Vec<Vec<String>>, Error> {
        self.ensure_initialized()?;
        let contents = fs::read_to_string(&self.path)?;

        // The first physical line is always the header and is never data.
        let body = match contents.split_once('\n') {
            Some((_header, body)) => body,
            None => "",
        };

        if !codec::quote_balanced(body) {
            tracing::warn!(
                path = %self.path.display(),
                "unbalanced quotes at end of file; final record decoded best-effort"
            );
        }

        Ok(codec::decode_rows(body))
    }

    /// Replace the entire file contents with the given records.
    ///
    /// Validates the batch first: every key must be non-blank after
    /// normalization and no two records may share a normalized key. Only
    /// then is the file truncated, the header rewritten, and every record
    /// encoded in the given order. This is the sole primitive under update
    /// and delete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] or [`Error::DuplicateKey`] from the
    /// pre-write validation (file untouched), and [`Error::Io`] on
    /// filesystem failure (file state unknown).
    pub fn write_all(&self, records: &[Vec<String>]) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            let key = record.first().map(String::as_str).unwrap_or("");
            let normalized = normalize_key(key);
            if normalized.is_empty() {
                return Err(Error::InvalidRecord(
                    "identifying name is blank".to_string(),
                ));
            }
            if !seen.insert(normalized) {
                return Err(Error::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = String::from(profile::HEADER);
        out.push('\n');
        for record in records {
            out.push_str(&codec::encode_row(record));
        }
        fs::write(&self.path, out)?;
        Ok(())
    }

    /// Replace the first record whose normalized key equals the normalized
    /// `key` with `new_record`. Every field may change, the key included;
    /// the rewrite re-validates uniqueness, so renaming onto another stored
    /// key fails with [`Error::DuplicateKey`] before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record matches, plus everything
    /// [`ProfileStore::write_all`] can return.
    pub fn update_by_key(&self, key: &str, new_record: &[String]) -> Result<(), Error> {
        let mut records = self.read_all()?;
        let normalized = normalize_key(key);
        let Some(pos) = records
            .iter()
            .position(|r| r.first().is_some_and(|k| normalize_key(k) == normalized))
        else {
            return Err(Error::NotFound {
                key: key.to_string(),
            });
        };
        records[pos] = new_record.to_vec();
        self.write_all(&records)
    }

    /// Remove the first record whose normalized key equals the normalized
    /// `key`.
    ///
    /// A missing key is an error, not a no-op: deleting nothing is
    /// indistinguishable from a typo in the key, and the symmetric
    /// behavior with [`ProfileStore::update_by_key`] keeps callers honest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record matches, plus everything
    /// [`ProfileStore::write_all`] can return.
    pub fn delete_by_key(&self, key: &str) -> Result<(), Error> {
        let mut records = self.read_all()?;
        let normalized = normalize_key(key);
        let Some(pos) = records
            .iter()
            .position(|r| r.first().is_some_and(|k| normalize_key(k) == normalized))
        else {
            return Err(Error::NotFound {
                key: key.to_string(),
            });
        };
        records.remove(pos);
        self.write_all(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a store over a fresh temp file, keeping the tempdir alive.
    fn temp_store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = ProfileStore::new(dir.path().join("Students.csv"));
        (dir, store)
    }

    /// Helper: a schema-sized record with the given name and comment.
    fn record(name: &str, comment: &str) -> Vec<String> {
        vec![
            name.to_string(),
            "Senior".to_string(),
            "Yes".to_string(),
            "TA".to_string(),
            "Python; Rust".to_string(),
            "Postgres".to_string(),
            "Backend Developer".to_string(),
            comment.to_string(),
            "No".to_string(),
            "No".to_string(),
        ]
    }

    // -- normalize_key --

    #[test]
    fn normalize_key_trims_and_collapses_whitespace() {
        assert_eq!(normalize_key("  Ada   Lovelace "), "ada lovelace");
    }

    #[test]
    fn normalize_key_lowercases() {
        assert_eq!(normalize_key("ADA LOVELACE"), "ada lovelace");
    }

    #[test]
    fn normalize_key_blank_input_is_empty() {
        assert_eq!(normalize_key("   \t "), "");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn differently_spaced_names_normalize_equal() {
        assert_eq!(normalize_key("Ada Lovelace"), normalize_key("ada   lovelace"));
    }

    // -- ensure_initialized --

    #[test]
    fn ensure_initialized_creates_file_with_header() {
        let (_dir, store) = temp_store();
        assert!(!store.path().exists());

        store.ensure_initialized().expect("init should succeed");

        let contents = fs::read_to_string(store.path()).expect("read file");
        assert_eq!(contents, format!("{}\n", profile::HEADER));
    }

    #[test]
    fn ensure_initialized_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = ProfileStore::new(dir.path().join("nested/deeper/Students.csv"));

        store.ensure_initialized().expect("init should succeed");
        assert!(store.path().exists());
    }

    #[test]
    fn ensure_initialized_is_idempotent() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "fine")).expect("append");

        store.ensure_initialized().expect("second init should succeed");

        // The existing record must survive re-initialization.
        assert_eq!(store.read_all().expect("read").len(), 1);
    }

    #[test]
    fn ensure_initialized_rewrites_empty_file() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "").expect("create empty file");

        store.ensure_initialized().expect("init should succeed");
        let contents = fs::read_to_string(store.path()).expect("read file");
        assert!(contents.starts_with(profile::HEADER));
    }

    // -- append --

    #[test]
    fn append_then_read_all_returns_record() {
        let (_dir, store) = temp_store();
        let rec = record("Ada Lovelace", "Great work");

        store.append(&rec).expect("append should succeed");

        let all = store.read_all().expect("read_all should succeed");
        assert_eq!(all, vec![rec]);
        assert_eq!(all[0][7], "Great work");
    }

    #[test]
    fn append_blank_key_fails_invalid_record() {
        let (_dir, store) = temp_store();
        let result = store.append(&record("   ", "x"));
        assert!(matches!(result, Err(Error::InvalidRecord(_))));
        // Nothing was written.
        assert!(store.read_all().expect("read").is_empty());
    }

    #[test]
    fn append_empty_record_fails_invalid_record() {
        let (_dir, store) = temp_store();
        let result = store.append(&[]);
        assert!(matches!(result, Err(Error::InvalidRecord(_))));
    }

    #[test]
    fn append_duplicate_key_fails_and_leaves_single_record() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "first")).expect("first append");

        let result = store.append(&record("Ada Lovelace", "second"));
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));

        let all = store.read_all().expect("read");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0][7], "first");
    }

    #[test]
    fn append_duplicate_under_normalization_fails() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "x")).expect("first append");

        // Different casing and spacing, same normalized key.
        let result = store.append(&record("ada   lovelace", "y"));
        match result {
            Err(Error::DuplicateKey { key }) => assert_eq!(key, "ada   lovelace"),
            other => panic!("expected DuplicateKey, got: {other:?}"),
        }
        assert_eq!(store.read_all().expect("read").len(), 1);
    }

    #[test]
    fn append_does_not_touch_existing_records() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "a")).expect("append");
        let before = fs::read_to_string(store.path()).expect("read");

        store.append(&record("Grace Hopper", "b")).expect("append");
        let after = fs::read_to_string(store.path()).expect("read");

        // The file strictly grew; the prior bytes are a prefix of the new contents.
        assert!(after.starts_with(&before));
    }

    #[test]
    fn append_multi_line_comment_round_trips() {
        let (_dir, store) = temp_store();
        let rec = record("Ada Lovelace", "Line1\nLine2");
        store.append(&rec).expect("append");

        let all = store.read_all().expect("read");
        assert_eq!(all[0][7], "Line1\nLine2");
    }

    // -- read_all --

    #[test]
    fn read_all_on_fresh_store_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.read_all().expect("read").is_empty());
        // And it initialized the file as a side effect.
        assert!(store.path().exists());
    }

    #[test]
    fn read_all_preserves_file_order() {
        let (_dir, store) = temp_store();
        for name in ["Charlie", "Alice", "Bob"] {
            store.append(&record(name, "")).expect("append");
        }
        let names: Vec<String> = store
            .read_all()
            .expect("read")
            .into_iter()
            .map(|r| r[0].clone())
            .collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
    }

    #[test]
    fn read_all_decodes_trailing_unbalanced_row_best_effort() {
        let (_dir, store) = temp_store();
        store.ensure_initialized().expect("init");
        // Simulate a rewrite cut off mid-record: unterminated quote at EOF.
        let mut file = OpenOptions::new()
            .append(true)
            .open(store.path())
            .expect("open");
        file.write_all(b"\"Ada\",\"cut off").expect("write");
        drop(file);

        let all = store.read_all().expect("read should still succeed");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], vec!["Ada".to_string(), "cut off".to_string()]);
    }

    // -- write_all --

    #[test]
    fn write_all_then_read_all_round_trips_in_order() {
        let (_dir, store) = temp_store();
        let records = vec![
            record("Ada Lovelace", "a"),
            record("Grace Hopper", "b"),
            record("Annie Easley", "c"),
        ];
        store.write_all(&records).expect("write_all");
        assert_eq!(store.read_all().expect("read"), records);
    }

    #[test]
    fn write_all_rejects_duplicate_keys_in_input() {
        let (_dir, store) = temp_store();
        store.append(&record("Keeper", "kept")).expect("append");

        let result = store.write_all(&[
            record("Ada Lovelace", "a"),
            record("ADA  LOVELACE", "b"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));

        // Validation failed before the rewrite; the file is untouched.
        let all = store.read_all().expect("read");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0][0], "Keeper");
    }

    #[test]
    fn write_all_rejects_blank_key_in_input() {
        let (_dir, store) = temp_store();
        let result = store.write_all(&[record("  ", "a")]);
        assert!(matches!(result, Err(Error::InvalidRecord(_))));
    }

    #[test]
    fn write_all_empty_batch_leaves_header_only_file() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "x")).expect("append");

        store.write_all(&[]).expect("write_all");

        let contents = fs::read_to_string(store.path()).expect("read");
        assert_eq!(contents, format!("{}\n", profile::HEADER));
    }

    // -- update_by_key --

    #[test]
    fn update_by_key_replaces_only_the_target() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "old")).expect("append");
        store.append(&record("Grace Hopper", "keep")).expect("append");

        let untouched_line = codec::encode_row(&record("Grace Hopper", "keep"));

        store
            .update_by_key("ada lovelace", &record("Ada Lovelace", "new"))
            .expect("update should succeed");

        let all = store.read_all().expect("read");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0][7], "new");
        assert_eq!(all[1][7], "keep");

        // The non-target record is byte-identical to its pre-update encoding.
        let contents = fs::read_to_string(store.path()).expect("read");
        assert!(contents.contains(&untouched_line));
    }

    #[test]
    fn update_by_key_may_change_the_key_itself() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "x")).expect("append");

        store
            .update_by_key("Ada Lovelace", &record("Ada King", "x"))
            .expect("rename should succeed");

        let all = store.read_all().expect("read");
        assert_eq!(all[0][0], "Ada King");
    }

    #[test]
    fn update_rename_onto_existing_key_fails_duplicate() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "a")).expect("append");
        store.append(&record("Grace Hopper", "b")).expect("append");

        let result = store.update_by_key("Ada Lovelace", &record("grace hopper", "c"));
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));

        // Both originals are still there, unchanged.
        let all = store.read_all().expect("read");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0][0], "Ada Lovelace");
    }

    #[test]
    fn update_by_key_on_empty_store_fails_not_found() {
        let (_dir, store) = temp_store();
        let result = store.update_by_key("Ada Lovelace", &record("Ada Lovelace", "x"));
        match result {
            Err(Error::NotFound { key }) => assert_eq!(key, "Ada Lovelace"),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    // -- delete_by_key --

    #[test]
    fn delete_by_key_removes_exactly_the_target() {
        let (_dir, store) = temp_store();
        for name in ["Ada Lovelace", "Grace Hopper", "Annie Easley"] {
            store.append(&record(name, "")).expect("append");
        }

        store.delete_by_key("GRACE  HOPPER").expect("delete");

        let names: Vec<String> = store
            .read_all()
            .expect("read")
            .into_iter()
            .map(|r| r[0].clone())
            .collect();
        assert_eq!(names, vec!["Ada Lovelace", "Annie Easley"]);
    }

    #[test]
    fn delete_by_key_missing_fails_not_found() {
        let (_dir, store) = temp_store();
        store.append(&record("Ada Lovelace", "x")).expect("append");

        let result = store.delete_by_key("Grace Hopper");
        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert_eq!(store.read_all().expect("read").len(), 1);
    }

    // -- fields with CSV specials survive the store --

    #[test]
    fn fields_with_commas_quotes_and_breaks_survive_rewrites() {
        let (_dir, store) = temp_store();
        let mut rec = record("Ada Lovelace", "she said \"hi\",\nthen left");
        rec[4] = "C, C++; Rust".to_string();
        store.append(&rec).expect("append");

        // Force a whole-file rewrite via an unrelated update.
        store.append(&record("Grace Hopper", "y")).expect("append");
        store
            .update_by_key("Grace Hopper", &record("Grace Hopper", "z"))
            .expect("update");

        let all = store.read_all().expect("read");
        assert_eq!(all[0], rec);
    }
}
