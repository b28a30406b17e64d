//! Core document store for the Dokploy docs corpus.
//!
//! This crate owns the fixed corpus catalog, the on-demand file loader, the
//! API reference section extractor, and the keyword search over the corpus.
//! It knows nothing about MCP; the protocol surface lives in `dokdocs-mcp`.

pub mod corpus;
pub mod search;
pub mod section;
pub mod store;
