#![deny(missing_docs)]

//! Core library for the AI Sticky Notes MCP server.

/// Environment-driven configuration management.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Append-only note storage.
pub mod notes;
