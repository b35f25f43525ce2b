//! Citation extraction from generated summaries.
//!
//! Summaries cite documents with bracketed 1-based markers like `[2]`.
//! Extraction is pure and idempotent: the same summary and document list
//! always produce the same ordered citation list.

use once_cell::sync::Lazy;
use regex::Regex;

use lawbridge_core::{Citation, RetrievedDocument};

/// Bracketed integer citation marker.
static CITATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("valid citation marker regex"));

/// Snippet length in characters.
const SNIPPET_CHARS: usize = 150;

/// Number of documents cited when the summary carries no markers at all.
const NO_MARKER_CITATION_COUNT: usize = 3;

/// Extract the citations a summary actually uses.
///
/// Markers outside `[1, documents.len()]` are ignored. The result is
/// deduplicated and sorted ascending by id. A summary without any valid
/// marker still cites the first `min(3, documents.len())` documents so the
/// caller never renders an answer with an empty source list.
pub fn extract_citations(summary: &str, documents: &[RetrievedDocument]) -> Vec<Citation> {
    let mut used_ids: Vec<usize> = Vec::new();

    for capture in CITATION_MARKER.captures_iter(summary) {
        let Ok(id) = capture[1].parse::<usize>() else {
            continue;
        };
        if id >= 1 && id <= documents.len() && !used_ids.contains(&id) {
            used_ids.push(id);
        }
    }

    used_ids.sort_unstable();

    if used_ids.is_empty() {
        return documents
            .iter()
            .take(NO_MARKER_CITATION_COUNT)
            .enumerate()
            .map(|(index, doc)| to_citation(index + 1, doc))
            .collect();
    }

    used_ids
        .into_iter()
        .map(|id| to_citation(id, &documents[id - 1]))
        .collect()
}

fn to_citation(id: usize, doc: &RetrievedDocument) -> Citation {
    Citation {
        id,
        title: doc.title.clone(),
        url: doc.url.clone(),
        snippet: Some(snippet(&doc.content)),
    }
}

/// First 150 characters of content plus an ellipsis. Truncation is by
/// character, not byte, so multibyte content cannot split a code point.
fn snippet(content: &str) -> String {
    let mut snippet: String = content.chars().take(SNIPPET_CHARS).collect();
    snippet.push_str("...");
    snippet
}
