//! Handler for the note summary prompt.

use std::sync::Arc;

use crate::{mcp::format::summary_prompt_text, notes::NoteStore};
use rmcp::{
    ErrorData as McpError,
    model::{GetPromptResult, PromptMessage, PromptMessageRole},
};

use super::storage_error;

/// Render the prompt asking the model to summarize every current note.
pub(crate) async fn handle_summary_prompt(
    store: &Arc<NoteStore>,
) -> Result<GetPromptResult, McpError> {
    let notes = store.get_all_notes().map_err(storage_error)?;
    Ok(GetPromptResult {
        description: Some("Summarize all current notes".into()),
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            summary_prompt_text(&notes),
        )],
    })
}
