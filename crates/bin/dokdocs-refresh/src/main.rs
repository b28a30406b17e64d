//! Corpus refresh entry point.
//!
//! Pulls the latest Dokploy documentation from Context7 and rewrites the
//! docs directory in place. Run it when Dokploy ships a release; the MCP
//! server picks up the new files on the next request. A failed query skips
//! that one file and keeps whatever was fetched before.

use std::path::PathBuf;

use clap::Parser;
use dokdocs_fetch::context7::Context7Client;
use dokdocs_fetch::{RefreshConfig, refresh_corpus};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dokdocs-refresh",
    version,
    about = "Fetches the Dokploy docs corpus from Context7."
)]
struct CliArgs {
    #[arg(long, env = "DOKDOCS_DOCS_DIR", default_value = "docs")]
    docs_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    tracing::info!(
        docs_dir = %args.docs_dir.display(),
        "fetching Dokploy documentation from Context7"
    );

    let query = Context7Client::new().into_query_fn();
    match refresh_corpus(&RefreshConfig::new(args.docs_dir), &query).await {
        Ok(report) => {
            tracing::info!(
                written = report.written.len(),
                skipped = report.skipped.len(),
                "refresh complete"
            );
        }
        Err(err) => {
            tracing::error!("refresh aborted: {err}");
            std::process::exit(1);
        }
    }
}
