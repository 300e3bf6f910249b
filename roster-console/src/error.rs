//! Error types for the roster-console TUI.
//!
//! Defines [`ConsoleError`], the unified error enum for all console
//! operations. Uses `thiserror` for derive-based error definitions. The
//! top-level `main` wraps this in `anyhow::Result` for convenience.

use thiserror::Error;

/// Unified error type for all roster-console operations.
///
/// # Variants
///
/// * `Store` - A storage error from the underlying profile store or catalog.
/// * `Io` - An I/O error (terminal operations, etc.).
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A storage error from roster-db.
    #[error("store error: {0}")]
    Store(#[from] roster_db::Error),

    /// An I/O error (terminal operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_from_roster_db() {
        let err = ConsoleError::from(roster_db::Error::NotFound {
            key: "Ada Lovelace".into(),
        });
        assert!(matches!(err, ConsoleError::Store(_)));
        let msg = err.to_string();
        assert!(msg.contains("store error"), "got: {msg}");
        assert!(msg.contains("Ada Lovelace"), "got: {msg}");
    }

    #[test]
    fn io_error_from_std_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broke");
        let err = ConsoleError::from(io_err);
        assert!(matches!(err, ConsoleError::Io(_)));
        let msg = err.to_string();
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("pipe broke"), "got: {msg}");
    }

    #[test]
    fn all_variants_debug_non_empty() {
        let variants: Vec<ConsoleError> = vec![
            ConsoleError::Store(roster_db::Error::InvalidRecord("blank".into())),
            ConsoleError::Io(std::io::Error::other("test")),
        ];
        for (i, variant) in variants.iter().enumerate() {
            let debug = format!("{variant:?}");
            assert!(!debug.is_empty(), "variant {i} produced empty Debug");
        }
    }

    #[test]
    fn converts_to_anyhow() {
        let err = ConsoleError::Store(roster_db::Error::DuplicateKey { key: "x".into() });
        let anyhow_err: anyhow::Error = err.into();
        assert!(anyhow_err.to_string().contains("store error"));
    }
}
