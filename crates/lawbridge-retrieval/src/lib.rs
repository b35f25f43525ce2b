//! # lawbridge-retrieval
//!
//! Document retrieval for lawbridge.
//!
//! The primary path queries the Veritus paper-search API; anything that
//! goes wrong there (missing credential, transport failure, non-2xx, zero
//! results) degrades to a curated offline corpus selected by keyword
//! match. The degraded path is a supported, first-class mode, not an
//! error: retrieval always resolves to a document list.

pub mod fallback;
pub mod veritus;

use async_trait::async_trait;
use tracing::{debug, warn};

use lawbridge_core::{DocumentRetriever, LegalCategory, RetrievedDocument};

pub use fallback::fallback_results;
pub use veritus::{VeritusClient, VeritusConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_VERITUS_URL};

/// Default number of documents handed to the generator.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Retrieval service: provider client plus offline fallback.
pub struct RetrievalService {
    client: Option<VeritusClient>,
}

impl RetrievalService {
    /// Create a service backed by the given client. Pass `None` to run
    /// permanently offline.
    pub fn new(client: Option<VeritusClient>) -> Self {
        Self { client }
    }

    /// Create from environment variables. Without `VERITUS_API_KEY` the
    /// service runs offline.
    pub fn from_env() -> lawbridge_core::Result<Self> {
        let config = VeritusConfig::from_env();
        if config.api_key.is_none() {
            warn!("VERITUS_API_KEY not configured, retrieval will use the offline corpus");
            return Ok(Self::new(None));
        }
        Ok(Self::new(Some(VeritusClient::new(config)?)))
    }

    /// Whether the primary provider is available.
    pub fn is_configured(&self) -> bool {
        self.client.as_ref().map(VeritusClient::is_configured) == Some(true)
    }
}

#[async_trait]
impl DocumentRetriever for RetrievalService {
    async fn retrieve(
        &self,
        question: &str,
        category: LegalCategory,
        limit: usize,
    ) -> Vec<RetrievedDocument> {
        if let Some(client) = self.client.as_ref().filter(|c| c.is_configured()) {
            match client.search(question, category, limit).await {
                Ok(documents) if !documents.is_empty() => {
                    debug!(
                        result_count = documents.len(),
                        "Primary retrieval succeeded"
                    );
                    return documents;
                }
                Ok(_) => {
                    warn!("Provider returned no results, using offline corpus");
                }
                Err(e) => {
                    warn!(error = %e, "Provider search failed, using offline corpus");
                }
            }
        }

        let documents = fallback_results(question, category, limit);
        debug!(
            result_count = documents.len(),
            degraded = true,
            "Offline corpus retrieval"
        );
        documents
    }
}
