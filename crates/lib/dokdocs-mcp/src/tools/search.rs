use dokdocs_core::store::DocStore;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::DokdocsMcp;

/// Parameters for searching the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    /// Search query (keyword or phrase).
    pub query: String,
}

#[tool_router(router = tool_router_search, vis = "pub")]
impl DokdocsMcp {
    #[tool(
        description = "Search across all Dokploy documentation by keyword. Returns matching sections with context."
    )]
    async fn dokploy_search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(search_response(self.store(), &params.query))
    }
}

fn search_response(store: &DocStore, query: &str) -> CallToolResult {
    let hits = store.search(query);
    if hits.is_empty() {
        return CallToolResult::success(vec![Content::text(format!(
            "No results found for \"{query}\"."
        ))]);
    }

    let formatted = hits
        .iter()
        .map(|hit| {
            format!(
                "### {} (line {})\n```\n{}\n```",
                hit.file, hit.line, hit.context
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    CallToolResult::success(vec![Content::text(format!(
        "Found {} result(s) for \"{query}\":\n\n{formatted}",
        hits.len()
    ))])
}
