use std::{collections::HashMap, future::Future, pin::Pin};

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, GetPromptResult, JsonObject, ReadResourceResult};

use super::server::NotesMcpServer;

pub type ResourceFuture =
    Pin<Box<dyn Future<Output = Result<ReadResourceResult, McpError>> + Send>>;
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<CallToolResult, McpError>> + Send>>;
pub type PromptFuture = Pin<Box<dyn Future<Output = Result<GetPromptResult, McpError>> + Send>>;

pub type ResourceHandler = fn(&NotesMcpServer) -> ResourceFuture;
pub type ToolHandler = fn(&NotesMcpServer, Option<JsonObject>) -> ToolFuture;
pub type PromptHandler = fn(&NotesMcpServer) -> PromptFuture;

/// Registry mapping tool names, resource URIs, and prompt names to handler functions.
pub struct Registry {
    pub resources: HashMap<&'static str, ResourceHandler>,
    pub tools: HashMap<&'static str, ToolHandler>,
    pub prompts: HashMap<&'static str, PromptHandler>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
            tools: HashMap::new(),
            prompts: HashMap::new(),
        }
    }

    pub fn register_resource(&mut self, uri: &'static str, handler: ResourceHandler) {
        self.resources.insert(uri, handler);
    }

    pub fn register_tool(&mut self, name: &'static str, handler: ToolHandler) {
        self.tools.insert(name, handler);
    }

    pub fn register_prompt(&mut self, name: &'static str, handler: PromptHandler) {
        self.prompts.insert(name, handler);
    }
}
