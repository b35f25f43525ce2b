//! Veritus paper-search client.
//!
//! Issues authenticated queries against the external search provider and
//! maps its paper-shaped records into [`RetrievedDocument`]s. Any provider
//! failure is reported as an error so the caller can degrade to the offline
//! corpus; this client never invents results.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use lawbridge_core::{Error, LegalCategory, Result, RetrievedDocument};

/// Default Veritus API endpoint.
pub const DEFAULT_VERITUS_URL: &str = "https://discover.veritus.ai/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Fallback URL when a paper carries no link of any kind.
const NO_LINK_URL: &str = "https://scholar.google.com";

/// Relevance score assumed when the provider omits one.
const DEFAULT_SCORE: f32 = 0.8;

/// Configuration for the Veritus client.
#[derive(Debug, Clone)]
pub struct VeritusConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication. `None` means the provider is not
    /// configured and retrieval runs entirely offline.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for VeritusConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VERITUS_URL.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl VeritusConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VERITUS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_VERITUS_URL.to_string()),
            api_key: std::env::var("VERITUS_API_KEY").ok().filter(|k| !k.is_empty()),
            timeout_seconds: std::env::var("VERITUS_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Paper record as returned by the provider. Most fields are optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VeritusPaper {
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "abstract", default)]
    abstract_text: Option<String>,
    #[serde(default)]
    tldr: Option<String>,
    #[serde(default)]
    authors: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    pdf_link: Option<String>,
    #[serde(default)]
    doi: Option<String>,
    #[serde(default)]
    journal_name: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    score: Option<f32>,
}

impl VeritusPaper {
    fn into_document(self) -> RetrievedDocument {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled Paper".to_string());

        // Prefer abstract, then tldr, then a short auto-generated blurb.
        let content = self
            .abstract_text
            .filter(|a| !a.is_empty())
            .or_else(|| self.tldr.clone().filter(|t| !t.is_empty()))
            .unwrap_or_else(|| {
                let mut blurb = format!("Academic paper: {}.", title);
                if let Some(authors) = &self.authors {
                    blurb.push_str(&format!(" Authors: {}.", authors));
                }
                if let Some(journal) = &self.journal_name {
                    blurb.push_str(&format!(" Published in: {}.", journal));
                }
                if let Some(year) = self.year {
                    blurb.push_str(&format!(" Year: {}.", year));
                }
                blurb
            });

        let url = self
            .link
            .filter(|l| !l.is_empty())
            .or_else(|| self.pdf_link.clone().filter(|l| !l.is_empty()))
            .or_else(|| self.doi.as_ref().map(|doi| format!("https://doi.org/{}", doi)))
            .unwrap_or_else(|| NO_LINK_URL.to_string());

        RetrievedDocument {
            title,
            content,
            url,
            score: self.score.unwrap_or(DEFAULT_SCORE),
        }
    }
}

/// Build the provider query string: bias plain questions toward legal
/// material, and toward the category when one is given.
pub fn build_search_query(question: &str, category: LegalCategory) -> String {
    if category.is_all() {
        format!("legal {}", question)
    } else {
        format!("{} law {}", category.as_str(), question)
    }
}

/// HTTP client for the Veritus paper-search API.
pub struct VeritusClient {
    client: Client,
    config: VeritusConfig,
}

impl VeritusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: VeritusConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Search(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing Veritus client: url={}, configured={}",
            config.base_url,
            config.api_key.is_some()
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(VeritusConfig::from_env())
    }

    /// Whether a credential is configured. Without one the primary path is
    /// skipped entirely.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Get the current configuration.
    pub fn config(&self) -> &VeritusConfig {
        &self.config
    }

    /// Query the provider for papers matching the question.
    ///
    /// Returns at most `limit` documents in provider order. An unconfigured
    /// credential, a non-2xx status, or a transport failure all surface as
    /// `Error::Search`; an empty result set is `Ok(vec![])`.
    pub async fn search(
        &self,
        question: &str,
        category: LegalCategory,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| Error::Config("VERITUS_API_KEY not configured".to_string()))?;

        let query = build_search_query(question, category);
        let url = format!(
            "{}/v1/papers/search",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(query = %query, "Searching Veritus API");

        let response = self
            .client
            .get(&url)
            .query(&[("title", query.as_str())])
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| Error::Search(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Search(format!(
                "Veritus returned {}: {}",
                status, body
            )));
        }

        let papers: Vec<VeritusPaper> = response
            .json()
            .await
            .map_err(|e| Error::Search(format!("Failed to parse response: {}", e)))?;

        debug!(result_count = papers.len(), "Veritus API returned papers");

        Ok(papers
            .into_iter()
            .take(limit)
            .map(VeritusPaper::into_document)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_query_without_category() {
        let query = build_search_query("can my landlord evict me", LegalCategory::All);
        assert_eq!(query, "legal can my landlord evict me");
    }

    #[test]
    fn test_build_search_query_with_category() {
        let query = build_search_query("overtime pay", LegalCategory::Employment);
        assert_eq!(query, "employment law overtime pay");
    }

    #[test]
    fn test_paper_prefers_abstract_over_tldr() {
        let paper: VeritusPaper = serde_json::from_str(
            r#"{"title": "T", "abstract": "full abstract", "tldr": "short", "link": "https://x.test"}"#,
        )
        .unwrap();
        let doc = paper.into_document();
        assert_eq!(doc.content, "full abstract");
        assert_eq!(doc.url, "https://x.test");
    }

    #[test]
    fn test_paper_blurb_when_no_abstract() {
        let paper: VeritusPaper = serde_json::from_str(
            r#"{"title": "Lease Law", "authors": "Doe", "journalName": "J. Law", "year": 2021}"#,
        )
        .unwrap();
        let doc = paper.into_document();
        assert_eq!(
            doc.content,
            "Academic paper: Lease Law. Authors: Doe. Published in: J. Law. Year: 2021."
        );
    }

    #[test]
    fn test_paper_url_preference_order() {
        let with_pdf: VeritusPaper =
            serde_json::from_str(r#"{"title": "T", "pdfLink": "https://pdf.test"}"#).unwrap();
        assert_eq!(with_pdf.into_document().url, "https://pdf.test");

        let with_doi: VeritusPaper =
            serde_json::from_str(r#"{"title": "T", "doi": "10.1/abc"}"#).unwrap();
        assert_eq!(with_doi.into_document().url, "https://doi.org/10.1/abc");

        let bare: VeritusPaper = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(bare.into_document().url, NO_LINK_URL);
    }

    #[test]
    fn test_paper_defaults() {
        let paper: VeritusPaper = serde_json::from_str("{}").unwrap();
        let doc = paper.into_document();
        assert_eq!(doc.title, "Untitled Paper");
        assert_eq!(doc.score, DEFAULT_SCORE);
    }

    #[test]
    fn test_config_defaults() {
        let config = VeritusConfig::default();
        assert_eq!(config.base_url, DEFAULT_VERITUS_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    }
}
