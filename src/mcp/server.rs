//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    mcp::{
        format::TEXT_PLAIN,
        handlers::{
            notes::{handle_add_note, handle_latest_note, handle_read_notes},
            summary::handle_summary_prompt,
        },
        registry, schemas,
    },
    notes::NoteStore,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, GetPromptRequestParam,
        GetPromptResult, JsonObject, ListPromptsResult, ListResourcesResult, ListToolsResult,
        Prompt, RawResource, ReadResourceRequestParam, ReadResourceResult, Resource,
        ServerCapabilities, ServerInfo, Tool, ToolAnnotations,
    },
};

/// URI of the resource holding the most recently added note.
pub const LATEST_NOTE_URI: &str = "notes://latest";
/// Tool that appends a note.
pub const ADD_NOTE_TOOL: &str = "add_note";
/// Tool that returns every note.
pub const READ_NOTES_TOOL: &str = "read_notes";
/// Prompt that asks the model to summarize the notes.
pub const SUMMARY_PROMPT: &str = "note_summary_prompt";

/// MCP server exposing the sticky note store as tools, a resource, and a prompt.
///
/// Every protocol entry point resolves through [`NotesMcpServer::invoke`],
/// [`NotesMcpServer::fetch_resource`], or [`NotesMcpServer::render_prompt`], which look up the
/// handler registered for the requested name and run it against the shared store.
#[derive(Clone)]
pub struct NotesMcpServer {
    store: Arc<NoteStore>,
    registry: Arc<registry::Registry>,
}

impl NotesMcpServer {
    /// Create a new MCP server backed by the supplied note store.
    pub fn new(store: Arc<NoteStore>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_tool(ADD_NOTE_TOOL, tool_add_note);
        registry.register_tool(READ_NOTES_TOOL, tool_read_notes);
        registry.register_resource(LATEST_NOTE_URI, resource_latest_note);
        registry.register_prompt(SUMMARY_PROMPT, prompt_note_summary);

        Self {
            store,
            registry: Arc::new(registry),
        }
    }

    /// Store shared by every handler.
    pub fn store(&self) -> &Arc<NoteStore> {
        &self.store
    }

    /// Run the tool registered under `name` with the supplied arguments.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = name, "Dispatching tool call");
        match self.registry.tools.get(name) {
            Some(handler) => handler(self, arguments).await,
            None => Err(McpError::invalid_params(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }

    /// Read the resource registered under `uri`.
    pub async fn fetch_resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        tracing::debug!(uri, "Dispatching resource read");
        match self.registry.resources.get(uri) {
            Some(handler) => handler(self).await,
            None => Err(McpError::invalid_params(
                format!("Unknown resource URI: {uri}"),
                None,
            )),
        }
    }

    /// Render the prompt registered under `name`.
    pub async fn render_prompt(&self, name: &str) -> Result<GetPromptResult, McpError> {
        tracing::debug!(prompt = name, "Dispatching prompt render");
        match self.registry.prompts.get(name) {
            Some(handler) => handler(self).await,
            None => Err(McpError::invalid_params(
                format!("Unknown prompt: {name}"),
                None,
            )),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: Cow::Borrowed(ADD_NOTE_TOOL),
                title: Some("Add Note".to_string()),
                description: Some(Cow::Borrowed(
                    "Append a new note to the sticky note file. Required: `message`, a single line of text. Responds with `status` and a confirmation `message`.",
                )),
                input_schema: Arc::new(schemas::add_note_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Add Note")
                        .destructive(false)
                        .idempotent(false)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed(READ_NOTES_TOOL),
                title: Some("Read Notes".to_string()),
                description: Some(Cow::Borrowed(
                    "Get all notes from the sticky note file, one per line, oldest first.",
                )),
                input_schema: Arc::new(schemas::empty_object_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Read Notes")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
        ]
    }

    fn describe_resources(&self) -> Vec<Resource> {
        let mut latest = RawResource::new(LATEST_NOTE_URI, "latest");
        latest.description = Some("The most recently added note".into());
        latest.mime_type = Some(TEXT_PLAIN.into());

        vec![latest.no_annotation()]
    }

    fn describe_prompts(&self) -> Vec<Prompt> {
        vec![Prompt::new(
            SUMMARY_PROMPT,
            Some("Generate a prompt asking the AI to summarize all current notes."),
            None,
        )]
    }
}

fn tool_add_note(server: &NotesMcpServer, arguments: Option<JsonObject>) -> registry::ToolFuture {
    let store = server.store.clone();
    Box::pin(async move { handle_add_note(&store, arguments).await })
}

fn tool_read_notes(server: &NotesMcpServer, _arguments: Option<JsonObject>) -> registry::ToolFuture {
    let store = server.store.clone();
    Box::pin(async move { handle_read_notes(&store).await })
}

fn resource_latest_note(server: &NotesMcpServer) -> registry::ResourceFuture {
    let store = server.store.clone();
    Box::pin(async move { handle_latest_note(&store, LATEST_NOTE_URI).await })
}

fn prompt_note_summary(server: &NotesMcpServer) -> registry::PromptFuture {
    let store = server.store.clone();
    Box::pin(async move { handle_summary_prompt(&store).await })
}

impl ServerHandler for NotesMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "sticky-notes".to_string();
        implementation.title = Some("AI Sticky Notes".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to keep short sticky notes. Call `add_note` with one line of text, `read_notes` to list everything, read `notes://latest` for the newest note, and use `note_summary_prompt` to summarize them.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = self.describe_resources();
        std::future::ready(Ok(ListResourcesResult::with_all_items(resources)))
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn list_prompts(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        let prompts = self.describe_prompts();
        std::future::ready(Ok(ListPromptsResult::with_all_items(prompts)))
    }

    #[allow(clippy::manual_async_fn)]
    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move { self.fetch_resource(&request.uri).await }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { self.invoke(request.name.as_ref(), request.arguments).await }
    }

    #[allow(clippy::manual_async_fn)]
    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move { self.render_prompt(&request.name).await }
    }
}
