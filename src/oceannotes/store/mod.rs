//! # Storage Layer
//!
//! Persistence for the note repository is a single opaque payload under one
//! well-known key. The [`SnapshotStore`] trait abstracts the backend:
//!
//! - [`fs::FileStore`]: production storage, one JSON file on disk
//! - [`memory::InMemoryStore`]: test backend with failure-injection knobs
//!
//! The contract is deliberately non-throwing. Loading distinguishes a
//! missing payload (first run, a normal outcome) from a failed read
//! (storage unavailable); saving reports success as a plain boolean. The
//! repository treats both failure cases as recoverable and never surfaces
//! them to its callers.

use crate::model::Note;

pub mod fs;
pub mod memory;

/// Outcome of [`SnapshotStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// A payload was present and read back intact.
    Found(String),
    /// No payload has ever been saved. Not a failure.
    Missing,
    /// A payload may exist but could not be read.
    Failed,
}

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Load the raw persisted payload, if any.
    fn load(&self) -> LoadResult;

    /// Persist the raw payload, replacing any previous one.
    ///
    /// Returns `false` on failure (quota, disabled store, denied access).
    /// Must not panic or propagate an error.
    fn save(&mut self, raw: &str) -> bool;
}

/// Serialize a snapshot to its persisted JSON form.
pub(crate) fn encode(notes: &[Note]) -> crate::error::Result<String> {
    Ok(serde_json::to_string(notes)?)
}
