use std::sync::Arc;

use rmcp::{
    handler::client::ClientHandler,
    model::{
        self, CallToolRequestParam, ClientInfo, GetPromptRequestParam, PaginatedRequestParam,
        PromptMessageContent, ReadResourceRequestParam, ResourceContents,
    },
    service::{RoleClient, RoleServer, RunningService, Service, serve_directly},
    transport::async_rw::AsyncRwTransport,
};
use serde_json::json;
use stickynotes::{
    logging,
    mcp::NotesMcpServer,
    notes::{NO_NOTES_PLACEHOLDER, NOTE_SAVED, NoteStore},
};
use tempfile::TempDir;
use tokio::{io::split, sync::OnceCell};

static INIT: OnceCell<()> = OnceCell::const_new();

#[derive(Clone, Default)]
struct DummyClientHandler;

impl ClientHandler for DummyClientHandler {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

struct TestHarness {
    service: RunningService<RoleClient, DummyClientHandler>,
    server: RunningService<RoleServer, NotesMcpServer>,
    _dir: TempDir,
}

impl TestHarness {
    async fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        INIT.get_or_init(|| async {
            let log_file = std::env::temp_dir().join("sticky-notes-tests.log");
            logging::init_tracing(Some(log_file.as_path()));
        })
        .await;

        let store = NoteStore::open(dir.path().join("notes.txt")).expect("open store");
        let server = NotesMcpServer::new(Arc::new(store));

        let (client_stream, server_stream) = tokio::io::duplex(16 * 1024);
        let (client_read, client_write) = split(client_stream);
        let (server_read, server_write) = split(server_stream);

        let client_transport = AsyncRwTransport::new_client(client_read, client_write);
        let server_transport = AsyncRwTransport::new_server(server_read, server_write);

        let server_info = server.get_info();
        let client_handler = DummyClientHandler;
        let client_info = ClientHandler::get_info(&client_handler);

        let server =
            serve_directly::<RoleServer, _, _, _, _>(server, server_transport, Some(client_info));
        let service = serve_directly::<RoleClient, _, _, _, _>(
            client_handler,
            client_transport,
            Some(server_info),
        );

        Self {
            service,
            server,
            _dir: dir,
        }
    }

    async fn add_note(&self, message: &str) -> serde_json::Value {
        let response = self
            .service
            .call_tool(CallToolRequestParam {
                name: "add_note".into(),
                arguments: Some(json!({ "message": message }).as_object().unwrap().clone()),
            })
            .await
            .expect("add_note tool call");
        assert_eq!(response.is_error, Some(false));
        response.structured_content.expect("structured payload")
    }

    async fn read_notes(&self) -> String {
        let response = self
            .service
            .call_tool(CallToolRequestParam {
                name: "read_notes".into(),
                arguments: Some(json!({}).as_object().unwrap().clone()),
            })
            .await
            .expect("read_notes tool call");
        let payload = response.structured_content.expect("structured payload");
        payload["notes"].as_str().expect("notes string").to_string()
    }

    async fn latest_note(&self) -> String {
        let result = self
            .service
            .read_resource(ReadResourceRequestParam {
                uri: "notes://latest".into(),
            })
            .await
            .expect("read latest resource");
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    async fn summary_prompt(&self) -> String {
        let result = self
            .service
            .get_prompt(GetPromptRequestParam {
                name: "note_summary_prompt".into(),
                arguments: None,
            })
            .await
            .expect("render summary prompt");
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text.clone(),
            other => panic!("expected text prompt, got {other:?}"),
        }
    }

    async fn shutdown(self) {
        let Self {
            service, server, ..
        } = self;
        let _ = service.cancel().await;
        let _ = server.cancel().await;
    }
}

#[tokio::test]
async fn initialize_and_list_capabilities() {
    let harness = TestHarness::new().await;
    let service = &harness.service;

    let info = service
        .peer_info()
        .expect("server info should be initialized");
    assert_eq!(info.server_info.name, "sticky-notes");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.capabilities.prompts.is_some());

    let tools = service
        .list_tools(Some(PaginatedRequestParam { cursor: None }))
        .await
        .expect("list_tools");
    let names: Vec<_> = tools.tools.iter().map(|tool| tool.name.as_ref()).collect();
    assert!(names.contains(&"add_note"));
    assert!(names.contains(&"read_notes"));

    let resources = service
        .list_resources(Some(PaginatedRequestParam { cursor: None }))
        .await
        .expect("list_resources");
    assert_eq!(resources.resources.len(), 1);
    assert_eq!(resources.resources[0].uri, "notes://latest");

    let prompts = service
        .list_prompts(Some(PaginatedRequestParam { cursor: None }))
        .await
        .expect("list_prompts");
    assert_eq!(prompts.prompts.len(), 1);
    assert_eq!(prompts.prompts[0].name, "note_summary_prompt");

    harness.shutdown().await;
}

#[tokio::test]
async fn empty_store_reports_placeholder_everywhere() {
    let harness = TestHarness::new().await;

    assert_eq!(harness.read_notes().await, NO_NOTES_PLACEHOLDER);
    assert_eq!(harness.latest_note().await, NO_NOTES_PLACEHOLDER);
    assert_eq!(harness.summary_prompt().await, "There are no notes yet.");

    harness.shutdown().await;
}

#[tokio::test]
async fn notes_round_trip_through_protocol() {
    let harness = TestHarness::new().await;

    let payload = harness.add_note("Buy milk").await;
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["message"], NOTE_SAVED);
    assert_eq!(harness.read_notes().await, "Buy milk");
    assert_eq!(harness.latest_note().await, "Buy milk");

    harness.add_note("Call Bob").await;
    assert_eq!(harness.latest_note().await, "Call Bob");
    assert_eq!(harness.read_notes().await, "Buy milk\nCall Bob");
    assert_eq!(
        harness.summary_prompt().await,
        "Summarize the current notes: Buy milk\nCall Bob"
    );

    harness.shutdown().await;
}

#[tokio::test]
async fn invalid_requests_return_invalid_params() {
    let harness = TestHarness::new().await;
    let service = &harness.service;

    let err = service
        .call_tool(CallToolRequestParam {
            name: "add_note".into(),
            arguments: Some(json!({ "text": "wrong field" }).as_object().unwrap().clone()),
        })
        .await
        .expect_err("add_note should fail");
    match err {
        rmcp::service::ServiceError::McpError(data) => {
            assert_eq!(data.code, model::ErrorCode::INVALID_PARAMS);
        }
        other => panic!("expected MCP error, got {other:?}"),
    }

    let err = service
        .call_tool(CallToolRequestParam {
            name: "delete_note".into(),
            arguments: None,
        })
        .await
        .expect_err("unknown tool should fail");
    match err {
        rmcp::service::ServiceError::McpError(data) => {
            assert_eq!(data.code, model::ErrorCode::INVALID_PARAMS);
        }
        other => panic!("expected MCP error, got {other:?}"),
    }

    harness.shutdown().await;
}
