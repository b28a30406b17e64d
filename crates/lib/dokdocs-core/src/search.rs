//! Keyword search across the corpus.

use crate::corpus::DOC_FILES;
use crate::store::{DocContent, DocStore};

/// Global cap on hits per query.
pub const MAX_RESULTS: usize = 10;

/// Lines of context kept on each side of a matching line.
pub const CONTEXT_LINES: usize = 5;

/// One keyword match with surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Corpus file the match came from.
    pub file: &'static str,
    /// 1-based line number of the matching line.
    pub line: usize,
    /// The matching line with up to [`CONTEXT_LINES`] lines on each side.
    pub context: String,
}

impl DocStore {
    /// Scans the corpus for `query`, case-insensitively.
    ///
    /// Documents are scanned in [`DOC_FILES`] order and missing ones are
    /// skipped, so results are ordered by (file, line) and deterministic for
    /// an unchanged docs directory. After a hit the scan resumes past its
    /// context window, which keeps nearby matches from producing overlapping
    /// blocks. An empty query matches every line.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for file in DOC_FILES {
            let text = match self.load(file) {
                DocContent::Found(text) => text,
                DocContent::Missing { .. } => continue,
            };
            let lines: Vec<&str> = text.lines().collect();

            let mut at = 0;
            while at < lines.len() {
                if hits.len() == MAX_RESULTS {
                    return hits;
                }
                if lines[at].to_lowercase().contains(&needle) {
                    let start = at.saturating_sub(CONTEXT_LINES);
                    let end = (at + CONTEXT_LINES + 1).min(lines.len());
                    hits.push(SearchHit {
                        file,
                        line: at + 1,
                        context: lines[start..end].join("\n"),
                    });
                    at = end;
                } else {
                    at += 1;
                }
            }
        }

        hits
    }
}
