//! Persistence adapter and the application state object.
//!
//! The note collection is mirrored wholesale to a key-value store: read once
//! at startup, rewritten after every change. [`NoteStore`] owns the state and
//! is the only write surface for it.

mod file;
mod kv;
mod note_store;
mod repository;

use thiserror::Error;

use crate::infra::FsError;

pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use note_store::{AppState, Change, NoteStore};
pub use repository::{NOTES_KEY, load, save};

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// The collection could not be serialized.
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
