//! MCP server entrypoint (stdio transport).
//!
//! Launches an MCP server that exposes the sticky note tools, resource, and prompt over stdio
//! for editor and agent integrations.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{service::ServiceExt, transport::stdio};
use stickynotes::{config, logging, mcp::NotesMcpServer, notes::NoteStore};

#[derive(Parser)]
#[command(
    name = "sticky-notes-mcp",
    about = "Append-only sticky notes served over MCP stdio",
    version
)]
struct Cli {
    /// Notes file to use instead of STICKY_NOTES_FILE.
    #[arg(long)]
    notes_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::init_config()
        .context("failed to load configuration")?
        .clone()
        .with_notes_file(cli.notes_file);
    logging::init_tracing(config.log_file.as_deref());
    config.log_loaded();

    let store = NoteStore::open(&config.notes_file).context("failed to open notes file")?;
    tracing::info!(notes_file = %store.path().display(), "Starting sticky notes MCP server");
    let server = NotesMcpServer::new(Arc::new(store));

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
