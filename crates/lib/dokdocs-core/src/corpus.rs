//! Static catalog of the documentation corpus.
//!
//! The corpus is a fixed set of nine markdown files. Everything that names a
//! file, an API reference category, or a guide resolves through this module,
//! so the maps exist exactly once for the process lifetime.

/// Corpus filenames, in search order.
pub const DOC_FILES: [&str; 9] = [
    "api-reference.md",
    "deploy-guide.md",
    "setup-guide.md",
    "auto-deploy.md",
    "troubleshooting.md",
    "github-integration.md",
    "domains-ssl.md",
    "databases.md",
    "docker-compose.md",
];

/// The document served by `dokploy_api_reference`.
pub const API_REFERENCE_FILE: &str = "api-reference.md";

/// API reference categories and the literal section heading for each.
pub const API_CATEGORIES: [(&str, &str); 8] = [
    ("projects", "## Projects"),
    ("applications", "## Applications"),
    ("databases", "## Databases"),
    ("domains", "## Domains"),
    ("deployments", "## Deployments"),
    ("compose", "## Docker Compose"),
    ("settings", "## Settings"),
    ("auto-deploy", "## Auto-deploy"),
];

/// Guide names and the corpus file backing each.
pub const GUIDES: [(&str, &str); 8] = [
    ("deploy", "deploy-guide.md"),
    ("setup", "setup-guide.md"),
    ("auto-deploy", "auto-deploy.md"),
    ("troubleshooting", "troubleshooting.md"),
    ("domains-ssl", "domains-ssl.md"),
    ("databases", "databases.md"),
    ("docker-compose", "docker-compose.md"),
    ("github-integration", "github-integration.md"),
];

/// Resolves a category name to its section heading.
#[must_use]
pub fn heading_for_category(category: &str) -> Option<&'static str> {
    API_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, heading)| *heading)
}

/// Resolves a guide name to its corpus file.
#[must_use]
pub fn file_for_guide(guide: &str) -> Option<&'static str> {
    GUIDES
        .iter()
        .find(|(name, _)| *name == guide)
        .map(|(_, filename)| *filename)
}

/// Comma-joined category names for unknown-category messages.
#[must_use]
pub fn category_list() -> String {
    join_names(&API_CATEGORIES)
}

/// Comma-joined guide names for unknown-guide messages.
#[must_use]
pub fn guide_list() -> String {
    join_names(&GUIDES)
}

fn join_names(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
