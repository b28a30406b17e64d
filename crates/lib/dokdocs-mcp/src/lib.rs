//! MCP server implementation for the Dokploy docs corpus.
//!
//! This crate wires the document store into rmcp tool handlers and exposes
//! the corpus documents as addressable resources.

mod resources;
mod tools;
pub mod server;

use std::sync::Arc;

use dokdocs_core::store::DocStore;
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
};
use rmcp::model::{
    CallToolRequestParam,
    CallToolResult,
    Content,
    Implementation,
    ListResourcesResult,
    ListToolsResult,
    PaginatedRequestParam,
    ReadResourceRequestParam,
    ReadResourceResult,
    ServerCapabilities,
    ServerInfo,
};
use rmcp::service::RequestContext;

const SERVER_INSTRUCTIONS: &str = r"dokploy-docs serves the Dokploy documentation corpus as MCP tools and resources.

Tools:
- `dokploy_api_reference`: REST API endpoint reference, either the whole document
  (category `all`) or a single category section.
- `dokploy_guide`: one named guide (deploy, setup, auto-deploy, troubleshooting,
  domains-ssl, databases, docker-compose, github-integration).
- `dokploy_search`: keyword search across every corpus document, returning matches
  with surrounding context.

Resources under `dokploy://docs/` expose the API reference, auto-deploy, and
troubleshooting documents as markdown.

If a document comes back as 'not found', the corpus has not been fetched yet;
run `dokdocs-refresh` on the host to populate the docs directory.";

/// MCP server wrapper around the document store and tool router.
#[derive(Clone)]
pub struct DokdocsMcp {
    tool_router: ToolRouter<Self>,
    store: Arc<DocStore>,
}

impl DokdocsMcp {
    /// Creates a new server owning its store.
    #[must_use]
    pub fn new(store: DocStore) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Creates a new server using a shared store handle.
    #[must_use]
    pub fn with_store(store: Arc<DocStore>) -> Self {
        let tool_router = Self::tool_router_reference()
            + Self::tool_router_guide()
            + Self::tool_router_search();
        Self { tool_router, store }
    }

    pub(crate) fn store(&self) -> &DocStore {
        &self.store
    }
}

impl ServerHandler for DokdocsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "dokploy-docs".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tool_router.list_all(),
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        // Unknown tool names are flagged on the result, not raised as a
        // protocol error.
        if !self.tool_router.has_route(request.name.as_ref()) {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Unknown tool: {}",
                request.name
            ))]));
        }
        let tool_call = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_call).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            next_cursor: None,
            resources: resources::catalog(),
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        Ok(resources::read(self.store(), &request.uri))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_declares_exactly_the_three_tools() {
        let service = DokdocsMcp::new(DocStore::new("docs"));
        let mut names: Vec<String> = service
            .tool_router
            .list_all()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            ["dokploy_api_reference", "dokploy_guide", "dokploy_search"]
        );
    }

    #[test]
    fn unrecognized_tool_names_are_not_routed() {
        let service = DokdocsMcp::new(DocStore::new("docs"));
        assert!(service.tool_router.has_route("dokploy_search"));
        assert!(!service.tool_router.has_route("dokploy_status"));
    }

    #[test]
    fn search_tool_schema_requires_a_query() {
        let service = DokdocsMcp::new(DocStore::new("docs"));
        let tools = service.tool_router.list_all();
        let search = tools
            .iter()
            .find(|tool| tool.name == "dokploy_search")
            .expect("search tool is declared");

        let schema = serde_json::to_value(search.input_schema.as_ref())
            .expect("schema serializes");
        assert!(schema["properties"]["query"].is_object());
        assert!(
            schema["required"]
                .as_array()
                .is_some_and(|required| required.iter().any(|name| name == "query"))
        );
    }
}
