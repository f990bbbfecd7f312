//! Handlers for the note tools and the latest-note resource.

use std::sync::Arc;

use crate::notes::NoteStore;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, ReadResourceResult},
};
use serde::Deserialize;
use serde_json::json;

use super::{parse_arguments, storage_error};
use crate::mcp::format::text_resource_contents;

/// Request payload accepted by the `add_note` tool.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AddNoteRequest {
    /// Text appended to the notes file.
    pub(crate) message: String,
}

/// Handle the `add_note` tool by appending the message to the store.
pub(crate) async fn handle_add_note(
    store: &Arc<NoteStore>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let AddNoteRequest { message } = parse_arguments(arguments)?;
    let confirmation = store.add_note(&message).map_err(storage_error)?;
    Ok(CallToolResult::structured(json!({
        "status": "ok",
        "message": confirmation,
    })))
}

/// Handle the `read_notes` tool, returning every stored note.
pub(crate) async fn handle_read_notes(
    store: &Arc<NoteStore>,
) -> Result<CallToolResult, McpError> {
    let notes = store.get_all_notes().map_err(storage_error)?;
    Ok(CallToolResult::structured(json!({ "notes": notes })))
}

/// Serve the latest-note resource at `uri`.
pub(crate) async fn handle_latest_note(
    store: &Arc<NoteStore>,
    uri: &str,
) -> Result<ReadResourceResult, McpError> {
    let latest = store.get_latest_note().map_err(storage_error)?;
    Ok(ReadResourceResult {
        contents: vec![text_resource_contents(uri, latest)],
    })
}
