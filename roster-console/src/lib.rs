//! RosterDB interactive TUI console library.
//!
//! This crate provides the core components for the `roster-console` binary:
//! application state, TUI rendering, and view modules. The console opens the
//! profile file and language catalog directly through `roster-db` -- every
//! store operation is a synchronous in-process call.

pub mod app;
pub mod error;
pub mod tui;
pub mod views;
