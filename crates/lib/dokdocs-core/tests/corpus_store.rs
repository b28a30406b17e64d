use std::fs;
use std::path::PathBuf;

use dokdocs_core::corpus::API_REFERENCE_FILE;
use dokdocs_core::section::{SectionOutcome, extract_section};
use dokdocs_core::store::{DocContent, DocStore};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("docs")
}

fn fixture_store() -> DocStore {
    DocStore::new(fixture_dir())
}

#[test]
fn load_returns_exact_file_content() {
    let store = fixture_store();
    let expected =
        fs::read_to_string(fixture_dir().join("setup-guide.md")).expect("fixture should exist");

    let DocContent::Found(text) = store.load("setup-guide.md") else {
        panic!("setup-guide.md should load");
    };
    assert_eq!(text, expected);
}

#[test]
fn load_reports_absent_files_in_band() {
    let store = fixture_store();
    let content = store.load("deploy-guide.md");
    assert!(content.is_missing());

    let text = content.into_text();
    assert!(text.contains("deploy-guide.md"));
    assert!(text.contains("not found"));
}

#[test]
fn section_extraction_works_on_the_reference_document() {
    let store = fixture_store();
    let DocContent::Found(reference) = store.load(API_REFERENCE_FILE) else {
        panic!("api-reference.md should load");
    };

    let SectionOutcome::Section(section) = extract_section(&reference, "projects") else {
        panic!("projects section should exist");
    };
    assert!(section.starts_with("## Projects"));
    assert!(section.contains("### project.create"));
    assert!(!section.contains("## Applications"));
    assert!(section.ends_with('\n'));
}

#[test]
fn search_finds_a_phrase_with_context() {
    let store = fixture_store();
    let hits = store.search("deploy failed");

    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.file, "troubleshooting.md");
    assert_eq!(hit.line, 10);
    assert!(hit.context.contains("Check the build logs first."));
    assert!(hit.context.contains("Let's Encrypt needs port 80"));
}

#[test]
fn search_is_case_insensitive() {
    let store = fixture_store();
    let hits = store.search("traefik");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].file, "setup-guide.md");
    assert_eq!(hits[0].line, 5);
}

#[test]
fn search_orders_hits_by_corpus_file_order() {
    let store = fixture_store();
    let hits = store.search("docker");

    let locations: Vec<(&str, usize)> = hits.iter().map(|hit| (hit.file, hit.line)).collect();
    assert_eq!(
        locations,
        vec![("api-reference.md", 21), ("setup-guide.md", 4)]
    );
}

#[test]
fn repeated_searches_are_identical() {
    let store = fixture_store();
    assert_eq!(store.search("deploy"), store.search("deploy"));
}
