use std::fmt::Write as _;
use std::fs;

use dokdocs_core::search::MAX_RESULTS;
use dokdocs_core::store::DocStore;
use tempfile::TempDir;

fn docs_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp docs dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("write doc");
    }
    dir
}

#[test]
fn match_line_and_context_window() {
    let mut guide = String::new();
    for line in 1..=60 {
        if line == 42 {
            guide.push_str("The deploy failed because the port was taken.\n");
        } else {
            let _ = writeln!(guide, "Step {line} of the walkthrough.");
        }
    }
    let dir = docs_dir(&[("deploy-guide.md", &guide)]);
    let store = DocStore::new(dir.path());

    let hits = store.search("deploy failed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line, 42);

    let context: Vec<&str> = hits[0].context.lines().collect();
    assert_eq!(context.len(), 11);
    assert_eq!(context[0], "Step 37 of the walkthrough.");
    assert_eq!(context[10], "Step 47 of the walkthrough.");
}

#[test]
fn context_is_clamped_at_document_boundaries() {
    let dir = docs_dir(&[("databases.md", "# Databases\nUse the internal hostname.\nDone.\n")]);
    let store = DocStore::new(dir.path());

    let hits = store.search("internal");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line, 2);
    assert_eq!(
        hits[0].context,
        "# Databases\nUse the internal hostname.\nDone."
    );
}

#[test]
fn never_more_than_ten_results() {
    let guide = "restart the service\n".repeat(200);
    let dir = docs_dir(&[("troubleshooting.md", &guide)]);
    let store = DocStore::new(dir.path());

    let hits = store.search("restart");
    assert_eq!(hits.len(), MAX_RESULTS);
}

#[test]
fn cap_applies_across_documents() {
    let noisy = "certificate renewal\n".repeat(200);
    let dir = docs_dir(&[("domains-ssl.md", &noisy), ("databases.md", &noisy)]);
    let store = DocStore::new(dir.path());

    let hits = store.search("certificate");
    assert_eq!(hits.len(), MAX_RESULTS);
    assert!(hits.iter().all(|hit| hit.file == "domains-ssl.md"));
}

#[test]
fn nearby_matches_share_one_context_block() {
    let doc = "error: first\nerror: second\n";
    let dir = docs_dir(&[("troubleshooting.md", doc)]);
    let store = DocStore::new(dir.path());

    let hits = store.search("error");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line, 1);
}

#[test]
fn scan_resumes_after_the_context_window() {
    let mut doc = String::from("needle at the top\n");
    for _ in 0..9 {
        doc.push_str("filler\n");
    }
    doc.push_str("needle at the bottom\n");
    let dir = docs_dir(&[("databases.md", &doc)]);
    let store = DocStore::new(dir.path());

    let hits = store.search("needle");
    let lines: Vec<usize> = hits.iter().map(|hit| hit.line).collect();
    assert_eq!(lines, vec![1, 11]);
}

#[test]
fn empty_query_matches_every_line() {
    let dir = docs_dir(&[("setup-guide.md", "one\ntwo\nthree\n")]);
    let store = DocStore::new(dir.path());

    let hits = store.search("");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line, 1);
    assert_eq!(hits[0].context, "one\ntwo\nthree");
}

#[test]
fn unmatched_query_returns_no_hits() {
    let dir = docs_dir(&[("setup-guide.md", "nothing to see here\n")]);
    let store = DocStore::new(dir.path());
    assert!(store.search("quantum").is_empty());
}

#[test]
fn missing_documents_are_skipped() {
    let dir = docs_dir(&[("docker-compose.md", "services scale with replicas\n")]);
    let store = DocStore::new(dir.path());

    let hits = store.search("replicas");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].file, "docker-compose.md");
}
