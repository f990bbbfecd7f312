//! File-backed note log: an append-only text file with one note per line.

pub mod store;
pub mod types;

pub use store::NoteStore;
pub use types::{NO_NOTES_PLACEHOLDER, NOTE_SAVED, NoteStoreError, StorageAction};
