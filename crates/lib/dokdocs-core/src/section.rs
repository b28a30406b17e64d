//! API reference section extraction.
//!
//! Sections are located by literal string matching on `## ` headings, not by
//! parsing markdown. Documents that drift from that heading convention will
//! not split correctly; the corpus is generated with it.

use crate::corpus;

/// Outcome of extracting one API reference section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The heading and everything up to the next same-level heading.
    Section(String),
    /// The category is known but its heading is absent from the document.
    HeadingMissing {
        category: String,
    },
    /// The category is not part of the catalog.
    UnknownCategory {
        category: String,
    },
}

/// Extracts the section for `category` from the full API reference text.
///
/// The section spans from the first occurrence of the category heading to
/// the start of the next second-level heading line, or to the end of the
/// document. The newline that closes the section is kept.
#[must_use]
pub fn extract_section(content: &str, category: &str) -> SectionOutcome {
    let Some(heading) = corpus::heading_for_category(category) else {
        return SectionOutcome::UnknownCategory {
            category: category.to_string(),
        };
    };
    let Some(start) = content.find(heading) else {
        return SectionOutcome::HeadingMissing {
            category: category.to_string(),
        };
    };

    let body_start = start + heading.len();
    let end = next_heading_offset(&content[body_start..])
        .map_or(content.len(), |offset| body_start + offset + 1);
    SectionOutcome::Section(content[start..end].to_string())
}

/// Byte offset of the newline that introduces the next `## ` heading.
///
/// A heading line is newline, `## `, then a non-`#` character, so deeper
/// `###` headings never terminate a section.
fn next_heading_offset(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(found) = text[from..].find("\n## ") {
        let at = from + found;
        match bytes.get(at + 4) {
            Some(b'#') => from = at + 1,
            Some(_) => return Some(at),
            None => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "\
# API Reference

## Projects

### project.all
GET /api/project.all

## Applications

### application.create
POST /api/application.create
";

    #[test]
    fn section_ends_at_next_heading() {
        let outcome = extract_section("## Projects\nA\n## Applications\nB", "projects");
        assert_eq!(
            outcome,
            SectionOutcome::Section("## Projects\nA\n".to_string())
        );
    }

    #[test]
    fn subheadings_stay_inside_the_section() {
        let SectionOutcome::Section(section) = extract_section(REFERENCE, "projects") else {
            panic!("expected a section");
        };
        assert!(section.starts_with("## Projects"));
        assert!(section.contains("### project.all"));
        assert!(!section.contains("## Applications"));
    }

    #[test]
    fn last_section_runs_to_end_of_document() {
        let SectionOutcome::Section(section) = extract_section(REFERENCE, "applications") else {
            panic!("expected a section");
        };
        assert!(section.starts_with("## Applications"));
        assert!(section.ends_with("POST /api/application.create\n"));
    }

    #[test]
    fn absent_heading_reports_the_category() {
        let outcome = extract_section(REFERENCE, "settings");
        assert_eq!(
            outcome,
            SectionOutcome::HeadingMissing {
                category: "settings".to_string()
            }
        );
    }

    #[test]
    fn unknown_category_is_rejected_before_extraction() {
        let outcome = extract_section(REFERENCE, "webhooks");
        assert_eq!(
            outcome,
            SectionOutcome::UnknownCategory {
                category: "webhooks".to_string()
            }
        );
    }
}
