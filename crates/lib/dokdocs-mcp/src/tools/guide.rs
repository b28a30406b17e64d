use dokdocs_core::corpus;
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

/// Parameters for fetching a named guide.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GuideParams {
    /// Guide name: "deploy", "setup", "auto-deploy", "troubleshooting",
    /// "domains-ssl", "databases", "docker-compose", "github-integration".
    pub guide: String,
}

#[tool_router(router = tool_router_guide, vis = "pub")]
impl DokdocsMcp {
    #[tool(
        description = "Get a specific Dokploy guide. Available guides: deploy (deploying from GitHub), setup (VPS setup from scratch), auto-deploy (GitHub App integration), troubleshooting (common errors and fixes), domains-ssl (domain and certificate setup), databases (creating and managing DBs), docker-compose (compose deployments), github-integration (git provider configuration)."
    )]
    async fn dokploy_guide(
        &self,
        Parameters(params): Parameters<GuideParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(guide_response(self.store(), &params.guide))
    }
}

fn guide_response(store: &DocStore, guide: &str) -> CallToolResult {
    let Some(filename) = corpus::file_for_guide(guide) else {
        return CallToolResult::success(vec![Content::text(format!(
            "Unknown guide: {guide}. Available: {}",
            corpus::guide_list()
        ))]);
    };
    CallToolResult::success(vec![Content::text(store.load(filename).into_text())])
}
