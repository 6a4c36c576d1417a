//! Durable key-value slots for client-side state.
//!
//! A [`SlotStore`] is the browser-local-storage equivalent: a flat map from
//! slot names to string values, read and written synchronously. The cart
//! persistence adapter sits on top of it and owns the encoding.
//!
//! # Implementations
//!
//! - [`FileStore`] - one `<key>.json` file per slot in a directory
//! - [`MemoryStore`] - in-process map, shared between clones (used in tests)

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a slot store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation on a slot failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory map was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// The backend refused the operation (e.g., quota exceeded).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous named-slot storage.
///
/// Writes overwrite the whole slot. Implementations must make a completed
/// `write` visible to every later `read` of the same key.
pub trait SlotStore {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
