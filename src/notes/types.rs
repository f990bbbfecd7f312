//! Error definitions and fixed strings shared by the note store and its callers.

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Confirmation returned after a note has been appended.
pub const NOTE_SAVED: &str = "Note Saved!";

/// Placeholder returned by the read operations when the log holds no notes.
pub const NO_NOTES_PLACEHOLDER: &str = "No notes yet!";

/// Filesystem operation that was being attempted when storage access failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    /// Creating the backing file.
    Create,
    /// Reading the whole file.
    Read,
    /// Appending a note line.
    Append,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Append => "append to",
        };
        f.write_str(label)
    }
}

/// Errors emitted by [`crate::notes::NoteStore`].
#[derive(Debug, Error)]
pub enum NoteStoreError {
    /// The backing file could not be created, read, or written.
    #[error("failed to {action} notes file '{}': {source}", path.display())]
    StorageAccess {
        /// Operation that failed.
        action: StorageAction,
        /// Location of the backing file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl NoteStoreError {
    pub(crate) fn storage(action: StorageAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StorageAccess {
            action,
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::StorageAccess { source, .. } => source.kind(),
        }
    }
}
