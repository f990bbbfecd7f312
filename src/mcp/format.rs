//! Formatting helpers shared across MCP handlers and resources.

use crate::notes::NO_NOTES_PLACEHOLDER;
use rmcp::model::ResourceContents;

pub(crate) const TEXT_PLAIN: &str = "text/plain";

/// Build plain-text resource contents for MCP resource responses.
pub(crate) fn text_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(TEXT_PLAIN.into()),
        text,
        meta: None,
    }
}

/// Turn the full note listing into the summarization instruction sent to the model.
pub(crate) fn summary_prompt_text(notes: &str) -> String {
    if notes == NO_NOTES_PLACEHOLDER {
        "There are no notes yet.".to_string()
    } else {
        format!("Summarize the current notes: {notes}")
    }
}
