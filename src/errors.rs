// src/errors.rs

//! Crate-wide error aliases.
//!
//! Structural problems (unreadable files, malformed JSON, unparseable
//! predecessor lists) travel as `anyhow` errors; graph *invalidity* never
//! does, it is a [`crate::dag::Verdict`]. This module is the single place
//! to add more structured error types later.

pub use anyhow::{Error, Result};
