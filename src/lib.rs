//! Cognitive Enhancement MCP Server
//!
//! An MCP (Model Context Protocol) server exposing a small set of
//! cognitive enhancement tools. The analysis behind them is an
//! explicitly mocked placeholder for a reasoning backend; the reusable
//! part is the tool dispatcher: a registry mapping tool names to typed
//! input validators and handlers, plus error-to-text conversion.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the main server handler,
//!   and the transport layer (stdio by default, tcp behind a feature)
//! - **domains**: business logic organized by bounded contexts
//!   - **cognition**: the capability provider (engine, analysis, types)
//!   - **tools**: MCP tools, their registry, and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use cognition_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
