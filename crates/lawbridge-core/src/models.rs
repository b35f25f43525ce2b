//! Data model for the search-and-summarize pipeline.
//!
//! Every entity here is ephemeral: it exists for the duration of a single
//! request and is never persisted.

use serde::{Deserialize, Deserializer, Serialize};

/// Closed set of legal topic categories used to bias retrieval.
///
/// Unrecognized values deserialize to [`LegalCategory::All`] rather than
/// failing the request; category is a hint, not a validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalCategory {
    Employment,
    Housing,
    Consumer,
    Family,
    Criminal,
    Immigration,
    Business,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    All,
}

impl LegalCategory {
    /// Lowercase name as it appears in search queries and corpus text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalCategory::All => "all",
            LegalCategory::Employment => "employment",
            LegalCategory::Housing => "housing",
            LegalCategory::Consumer => "consumer",
            LegalCategory::Family => "family",
            LegalCategory::Criminal => "criminal",
            LegalCategory::Immigration => "immigration",
            LegalCategory::Business => "business",
        }
    }

    /// Whether this category carries no retrieval bias.
    pub fn is_all(&self) -> bool {
        matches!(self, LegalCategory::All)
    }
}

/// A document produced by the retriever and consumed by the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub title: String,
    pub content: String,
    pub url: String,
    /// Provider relevance score in [0, 1], best-effort.
    pub score: f32,
}

/// A citation derived from a [`RetrievedDocument`] actually referenced by
/// the generated summary. `id` is the 1-based position of the document in
/// the retrieval order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: usize,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Request body for `POST /search`.
///
/// Both fields deserialize leniently: a missing or non-string `question`
/// reaches the validator (which produces the user-facing error) instead of
/// dying in deserialization, and a non-string `category` counts as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<LegalCategory>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<LegalCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| serde_json::from_value(serde_json::Value::String(s.to_string())).ok()))
}

/// Terminal artifact returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub summary: String,
    pub sources: Vec<Citation>,
}

/// Output of the summary generator: summary text plus the subset of
/// documents it actually cites.
#[derive(Debug, Clone)]
pub struct GeneratedSummary {
    pub summary: String,
    pub sources: Vec<Citation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        let cat: LegalCategory = serde_json::from_str("\"housing\"").unwrap();
        assert_eq!(cat, LegalCategory::Housing);
        assert_eq!(serde_json::to_string(&cat).unwrap(), "\"housing\"");
    }

    #[test]
    fn test_unknown_category_tolerated() {
        // Unrecognized categories are treated as "all", not rejected, and
        // the catch-all must not swallow the known names.
        let cat: LegalCategory = serde_json::from_str("\"maritime\"").unwrap();
        assert_eq!(cat, LegalCategory::All);
        let cat: LegalCategory = serde_json::from_str("\"housing\"").unwrap();
        assert_eq!(cat, LegalCategory::Housing);
        assert_eq!(LegalCategory::default(), LegalCategory::All);
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(LegalCategory::Employment.as_str(), "employment");
        assert_eq!(LegalCategory::All.as_str(), "all");
        assert!(LegalCategory::All.is_all());
        assert!(!LegalCategory::Criminal.is_all());
    }

    #[test]
    fn test_search_request_missing_question_deserializes() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.question.is_none());
        assert!(req.category.is_none());
    }

    #[test]
    fn test_search_request_non_string_question_is_none() {
        let req: SearchRequest = serde_json::from_str(r#"{"question": 42}"#).unwrap();
        assert!(req.question.is_none());
    }

    #[test]
    fn test_search_request_non_string_category_is_none() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"question": "valid question", "category": 7}"#).unwrap();
        assert!(req.category.is_none());

        let req: SearchRequest =
            serde_json::from_str(r#"{"question": "valid question", "category": "maritime"}"#)
                .unwrap();
        assert_eq!(req.category, Some(LegalCategory::All));
    }

    #[test]
    fn test_citation_snippet_omitted_when_none() {
        let citation = Citation {
            id: 1,
            title: "Tenant Rights".to_string(),
            url: "https://example.org".to_string(),
            snippet: None,
        };
        let json = serde_json::to_string(&citation).unwrap();
        assert!(!json.contains("snippet"));
    }

    #[test]
    fn test_search_response_shape() {
        let response = SearchResponse {
            summary: "text [1]".to_string(),
            sources: vec![Citation {
                id: 1,
                title: "t".to_string(),
                url: "u".to_string(),
                snippet: Some("s".to_string()),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["summary"], "text [1]");
        assert_eq!(json["sources"][0]["id"], 1);
    }
}
