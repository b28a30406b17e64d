use dokdocs_core::corpus::{self, API_REFERENCE_FILE};
use dokdocs_core::section::{SectionOutcome, extract_section};
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

/// Parameters for the API reference lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ApiReferenceParams {
    /// API category: "all", "projects", "applications", "databases",
    /// "domains", "deployments", "compose", "settings", "auto-deploy".
    pub category: String,
}

#[tool_router(router = tool_router_reference, vis = "pub")]
impl DokdocsMcp {
    #[tool(
        description = "Get Dokploy REST API reference for a specific category (projects, applications, databases, domains, deployments, compose, settings, auto-deploy), or \"all\" for the full document. Returns endpoint details with request/response formats."
    )]
    async fn dokploy_api_reference(
        &self,
        Parameters(params): Parameters<ApiReferenceParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(reference_response(self.store(), &params.category))
    }
}

fn reference_response(store: &DocStore, category: &str) -> CallToolResult {
    let content = store.load(API_REFERENCE_FILE).into_text();
    if category == "all" {
        return CallToolResult::success(vec![Content::text(content)]);
    }

    let text = match extract_section(&content, category) {
        SectionOutcome::Section(section) => section,
        SectionOutcome::HeadingMissing { category } => {
            format!("Section \"{category}\" not found in API reference.")
        }
        SectionOutcome::UnknownCategory { category } => {
            format!(
                "Unknown category: {category}. Available: {}",
                corpus::category_list()
            )
        }
    };
    CallToolResult::success(vec![Content::text(text)])
}
