//! Error types for RosterDB.
//!
//! This module defines the unified error enum used throughout the crate. All
//! fallible operations return `Result<T, Error>`. The invariant checks
//! (`InvalidRecord`, `DuplicateKey`, `NotFound`) run before any byte is
//! written, so when one of them is returned the backing file is untouched.

/// Unified error type for all RosterDB operations.
///
/// Each variant represents a distinct failure mode:
///
/// - `InvalidRecord` -> the record cannot be accepted (blank key, missing fields)
/// - `DuplicateKey` -> a write would produce two records with the same normalized key
/// - `NotFound` -> the targeted key matched no stored record
/// - `Io` -> the underlying filesystem operation failed
///
/// Only `Io` can leave the file in a partial state: a failed whole-file
/// rewrite may have truncated the file already, so callers must treat it as
/// "storage state unknown" rather than assume a rollback happened.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record cannot be stored as-is, e.g. the identifying name is blank
    /// or the row has fewer fields than the schema requires.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A record with the same normalized key already exists (or the same
    /// batch contains the key twice).
    #[error("duplicate key: a profile for {key:?} already exists")]
    DuplicateKey {
        /// The offending key as the caller supplied it, un-normalized.
        key: String,
    },

    /// No stored record matches the requested key.
    #[error("profile not found: {key:?}")]
    NotFound {
        /// The key that matched nothing, as the caller supplied it.
        key: String,
    },

    /// An I/O error occurred during a file operation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
