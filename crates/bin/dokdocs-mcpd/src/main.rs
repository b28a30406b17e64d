//! Daemon entry point for the Dokploy docs MCP server.
//!
//! Loads configuration from CLI arguments and the environment, builds the
//! document store, and serves the MCP protocol over stdio or streamable
//! HTTP. Logs go to stderr; stdout belongs to the protocol stream.

mod config;

use std::sync::Arc;

use dokdocs_core::store::DocStore;
use dokdocs_mcp::server::{self, McpHttpServerConfig};
use tracing_subscriber::EnvFilter;

use crate::config::DokdocsConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = DokdocsConfig::from_args()?;
    if !config.docs_dir.is_dir() {
        tracing::warn!(
            docs_dir = %config.docs_dir.display(),
            "docs directory not found; run dokdocs-refresh to fetch the corpus"
        );
    }
    let store = Arc::new(DocStore::new(config.docs_dir));

    if config.serve_http {
        tracing::info!(addr = %config.mcp_http_addr, "dokploy-docs MCP server listening on HTTP");
        server::serve_streamable_http(store, McpHttpServerConfig::new(config.mcp_http_addr)).await
    } else {
        tracing::info!("dokploy-docs MCP server running on stdio");
        server::serve_stdio(store).await
    }
}
