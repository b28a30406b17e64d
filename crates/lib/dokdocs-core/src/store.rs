//! On-demand loader for corpus documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Outcome of loading one corpus document.
///
/// Missing files are ordinary data, not errors: the MCP surface flattens
/// [`DocContent::Missing`] into placeholder text, and search skips it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocContent {
    /// The file existed and was read in full.
    Found(String),
    /// The file is absent from the docs directory (or unreadable).
    Missing {
        filename: String,
    },
}

impl DocContent {
    /// Whether the document failed to load.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Flattens to the text handed to MCP clients.
    ///
    /// The placeholder keeps the original caller-visible contract: it names
    /// the file and contains the substring "not found".
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::Missing { filename } => format!(
                "Documentation file not found: {filename}. \
                 Run `dokdocs-refresh` to fetch the latest docs."
            ),
        }
    }
}

/// Read-only handle on the documentation directory.
///
/// Constructed once at startup and shared; every [`DocStore::load`] re-reads
/// from disk so a corpus refresh is picked up without a restart.
#[derive(Debug, Clone)]
pub struct DocStore {
    docs_dir: PathBuf,
}

impl DocStore {
    #[must_use]
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
        }
    }

    #[must_use]
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Loads one corpus document by filename.
    #[must_use]
    pub fn load(&self, filename: &str) -> DocContent {
        let path = self.docs_dir.join(filename);
        match fs::read_to_string(&path) {
            Ok(text) => DocContent::Found(text),
            Err(err) => {
                debug!(file = filename, "corpus file not readable: {err}");
                DocContent::Missing {
                    filename: filename.to_string(),
                }
            }
        }
    }
}
