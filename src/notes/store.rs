//! Append-only note storage backed by a single text file.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::notes::types::{NO_NOTES_PLACEHOLDER, NOTE_SAVED, NoteStoreError, StorageAction};

/// Owns the notes file and exposes append and read access to it.
///
/// The store is constructed explicitly with its path and shared by the MCP server through an
/// `Arc`. No locking is performed: appends from other processes may interleave with ours.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Open the store at `path`, creating an empty file when none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, NoteStoreError> {
        let store = Self { path: path.into() };
        store.ensure_exists()?;
        Ok(store)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file if it is missing. Existing content is left untouched.
    pub fn ensure_exists(&self) -> Result<(), NoteStoreError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| NoteStoreError::storage(StorageAction::Create, &self.path, err))?;
        Ok(())
    }

    /// Append `message` as a new line and return the fixed confirmation.
    ///
    /// The message is written as-is; embedded line terminators produce extra entries.
    pub fn add_note(&self, message: &str) -> Result<&'static str, NoteStoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| NoteStoreError::storage(StorageAction::Append, &self.path, err))?;
        file.write_all(format!("{message}\n").as_bytes())
            .map_err(|err| NoteStoreError::storage(StorageAction::Append, &self.path, err))?;
        tracing::debug!(path = %self.path.display(), bytes = message.len() + 1, "Appended note");
        Ok(NOTE_SAVED)
    }

    /// Return every note as one trimmed blob, or the placeholder when there are none.
    pub fn get_all_notes(&self) -> Result<String, NoteStoreError> {
        let content = self.read_trimmed()?;
        if content.is_empty() {
            return Ok(NO_NOTES_PLACEHOLDER.to_string());
        }
        Ok(content)
    }

    /// Return the most recent note, or the placeholder when there are none.
    ///
    /// Trailing blank lines are dropped by the trim before the split, so the result is the
    /// last line with content.
    pub fn get_latest_note(&self) -> Result<String, NoteStoreError> {
        let content = self.read_trimmed()?;
        if content.is_empty() {
            return Ok(NO_NOTES_PLACEHOLDER.to_string());
        }
        Ok(last_line(&content).to_string())
    }

    fn read_trimmed(&self) -> Result<String, NoteStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.ensure_exists()?;
                String::new()
            }
            Err(err) => return Err(NoteStoreError::storage(StorageAction::Read, &self.path, err)),
        };
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "Read notes file");
        Ok(content.trim_matches(is_blank).to_string())
    }
}

/// Characters that end a line: `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Whitespace stripped around the whole blob. Unicode whitespace plus the ASCII separators
/// `\x1c`..=`\x1f`, which also count as blank here.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Last line of an already trimmed blob. `\r\n` needs no special case: the text after the
/// final boundary is the same whichever way the pair is counted.
fn last_line(content: &str) -> &str {
    match content.rfind(is_line_boundary) {
        Some(index) => {
            let boundary_len = content[index..].chars().next().map_or(1, char::len_utf8);
            &content[index + boundary_len..]
        }
        None => content,
    }
}
