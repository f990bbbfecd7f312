//! Model Context Protocol (MCP) integration for AI Sticky Notes.
//!
//! This module wires the note store into an MCP server so editors and agent hosts can keep
//! notes over stdio. The surface area consists of:
//!
//! - Tools: `add_note` and `read_notes`.
//! - Resources: `notes://latest`.
//! - Prompts: `note_summary_prompt`.
//!
//! Handlers, schemas, and formatting helpers are kept in focused submodules.

mod format;
pub mod handlers;
mod registry;
mod schemas;
mod server;

pub use server::{ADD_NOTE_TOOL, LATEST_NOTE_URI, NotesMcpServer, READ_NOTES_TOOL, SUMMARY_PROMPT};
