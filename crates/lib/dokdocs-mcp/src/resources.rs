//! Addressable resources over the corpus.
//!
//! A fixed three-entry catalog maps `dokploy://docs/*` URIs onto corpus
//! files. Unknown URIs are answered with in-band text, mirroring how the
//! tools report unknown inputs.

use dokdocs_core::store::DocStore;
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};

/// (uri, filename, name, description) for each addressable document.
const RESOURCE_DOCS: [(&str, &str, &str, &str); 3] = [
    (
        "dokploy://docs/api-reference",
        "api-reference.md",
        "Dokploy API Reference",
        "Complete REST API endpoint documentation",
    ),
    (
        "dokploy://docs/auto-deploy",
        "auto-deploy.md",
        "Auto-Deploy Guide",
        "GitHub App integration and auto-deploy setup",
    ),
    (
        "dokploy://docs/troubleshooting",
        "troubleshooting.md",
        "Troubleshooting Guide",
        "Common issues and solutions",
    ),
];

pub(crate) fn catalog() -> Vec<Resource> {
    RESOURCE_DOCS
        .iter()
        .map(|(uri, _, name, description)| {
            let mut resource = RawResource::new(*uri, (*name).to_string());
            resource.description = Some((*description).to_string());
            resource.mime_type = Some("text/markdown".to_string());
            resource.no_annotation()
        })
        .collect()
}

pub(crate) fn read(store: &DocStore, uri: &str) -> ReadResourceResult {
    let filename = RESOURCE_DOCS
        .iter()
        .find(|(known, ..)| *known == uri)
        .map(|(_, filename, ..)| *filename);

    let contents = match filename {
        Some(filename) => text_contents(
            uri,
            "text/markdown",
            store.load(filename).into_text(),
        ),
        None => text_contents(uri, "text/plain", format!("Unknown resource: {uri}")),
    };
    ReadResourceResult {
        contents: vec![contents],
    }
}

fn text_contents(uri: &str, mime_type: &str, text: String) -> ResourceContents {
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type: mime, .. } = &mut contents {
        *mime = Some(mime_type.to_string());
    }
    contents
}
