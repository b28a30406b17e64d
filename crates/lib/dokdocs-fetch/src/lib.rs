//! Corpus refresh pipeline for the Dokploy docs corpus.
//!
//! Queries a documentation-indexing API for each corpus file and writes the
//! responses into the docs directory. The query capability is injected so
//! the refresh loop can run against a stub without network access; the real
//! Context7 client lives in [`context7`].
//!
//! This is an offline maintenance task. The live MCP server never calls it;
//! it only reads the files this pipeline produces.

pub mod context7;

use std::error::Error;
use std::fmt;
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

/// One corpus entry: the indexing query, destination file, and display label.
#[derive(Debug, Clone, Copy)]
pub struct DocQuery {
    pub query: &'static str,
    pub filename: &'static str,
    pub description: &'static str,
}

/// The nine corpus queries, in refresh order.
pub const DOC_QUERIES: [DocQuery; 9] = [
    DocQuery {
        query: "Dokploy REST API endpoints application create deploy update project create environment all methods request response format",
        filename: "api-reference.md",
        description: "API Reference",
    },
    DocQuery {
        query: "Deploy application from GitHub repository step by step create project application environment build deploy",
        filename: "deploy-guide.md",
        description: "Deploy Guide",
    },
    DocQuery {
        query: "Install Dokploy on VPS server setup Docker Traefik firewall initial configuration",
        filename: "setup-guide.md",
        description: "Setup Guide",
    },
    DocQuery {
        query: "GitHub App auto-deploy autodeploy push branch automatic deployment configuration",
        filename: "auto-deploy.md",
        description: "Auto-Deploy Guide",
    },
    DocQuery {
        query: "Troubleshooting SSL Let's Encrypt certificate build errors deployment failures common issues",
        filename: "troubleshooting.md",
        description: "Troubleshooting Guide",
    },
    DocQuery {
        query: "GitHub integration private repositories GitHub App installation configuration git providers",
        filename: "github-integration.md",
        description: "GitHub Integration Guide",
    },
    DocQuery {
        query: "Domain configuration SSL certificate HTTPS Let's Encrypt Traefik custom domain setup",
        filename: "domains-ssl.md",
        description: "Domains & SSL Guide",
    },
    DocQuery {
        query: "PostgreSQL MySQL MongoDB Redis database create deploy connection string internal external",
        filename: "databases.md",
        description: "Databases Guide",
    },
    DocQuery {
        query: "Docker Compose deployment compose create update deploy raw YAML multi-container",
        filename: "docker-compose.md",
        description: "Docker Compose Guide",
    },
];

/// Failures of a single fetch, or of the run itself.
#[derive(Debug)]
pub enum FetchError {
    /// The indexing API answered with a non-success status.
    Http { status: u16 },
    /// The request never completed, or the body was not the expected JSON.
    Transport(String),
    /// The docs directory or a destination file could not be written.
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { status } => write!(f, "documentation API returned HTTP {status}"),
            Self::Transport(message) => write!(f, "documentation API request failed: {message}"),
            Self::Io { path, source } => write!(f, "failed to write {path}: {source}"),
        }
    }
}

impl Error for FetchError {}

pub type QueryFuture = Pin<Box<dyn Future<Output = Result<Option<String>, FetchError>> + Send>>;

/// Injected fetch capability: query text in, markdown payload out.
pub type QueryFn = Arc<dyn Fn(String) -> QueryFuture + Send + Sync>;

/// Settings for one refresh run.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub docs_dir: PathBuf,
    /// Courtesy pause between consecutive queries.
    pub delay: Duration,
}

impl RefreshConfig {
    #[must_use]
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            delay: Duration::from_secs(1),
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Which corpus files a refresh run wrote and which it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub written: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

/// Refreshes the whole corpus, one query at a time.
///
/// A failed fetch (or a response without content) logs the reason, skips
/// that file, and leaves any previous version in place. Filesystem failures
/// abort the run.
///
/// # Errors
/// Returns [`FetchError::Io`] when the docs directory cannot be created or
/// a destination file cannot be written.
pub async fn refresh_corpus(
    config: &RefreshConfig,
    query: &QueryFn,
) -> Result<RefreshReport, FetchError> {
    fs::create_dir_all(&config.docs_dir).map_err(|source| FetchError::Io {
        path: config.docs_dir.display().to_string(),
        source,
    })?;

    let fetch = Arc::clone(query);
    let mut report = RefreshReport::default();
    for (index, doc) in DOC_QUERIES.iter().enumerate() {
        info!(file = doc.filename, "fetching {}", doc.description);
        match (fetch)(doc.query.to_string()).await {
            Ok(Some(content)) => {
                write_doc(&config.docs_dir, doc.filename, &content)?;
                info!(file = doc.filename, "saved");
                report.written.push(doc.filename);
            }
            Ok(None) => {
                error!(
                    file = doc.filename,
                    "failed to fetch {}: response carried no content", doc.description
                );
                report.skipped.push(doc.filename);
            }
            Err(err) => {
                error!(file = doc.filename, "failed to fetch {}: {err}", doc.description);
                report.skipped.push(doc.filename);
            }
        }
        if index + 1 < DOC_QUERIES.len() {
            tokio::time::sleep(config.delay).await;
        }
    }
    Ok(report)
}

fn write_doc(docs_dir: &Path, filename: &str, content: &str) -> Result<(), FetchError> {
    fs::write(docs_dir.join(filename), content).map_err(|source| FetchError::Io {
        path: filename.to_string(),
        source,
    })
}
