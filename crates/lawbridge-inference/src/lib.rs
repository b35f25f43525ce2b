//! # lawbridge-inference
//!
//! Summary generation for lawbridge.
//!
//! This crate provides:
//! - An OpenAI-compatible chat backend (one-shot completions)
//! - Fixed prompt construction for legal summaries
//! - Table-driven canned templates for the degraded (offline) path
//! - Citation extraction from generated text
//! - A mock backend for tests (feature `mock`)
//!
//! The degraded path is a supported mode: without a credential, or when a
//! provider call fails, generation substitutes a keyword-selected template
//! and runs the same citation extraction over it. Only an *empty* primary
//! completion is a hard error; that signals a broken model rather than an
//! unavailable one.

pub mod citations;
pub mod openai;
pub mod prompt;
pub mod templates;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use lawbridge_core::{
    ChatBackend, Error, GeneratedSummary, Result, RetrievedDocument, SummaryGenerator,
};

pub use citations::extract_citations;
pub use openai::{OpenAIBackend, OpenAIConfig};
pub use prompt::{build_user_prompt, SYSTEM_PROMPT};
pub use templates::select_template;

/// Summary generation service: primary chat backend plus template fallback.
pub struct SummaryService {
    backend: Option<Arc<dyn ChatBackend>>,
}

impl SummaryService {
    /// Create a service over the given backend. Pass `None` to run
    /// permanently on templates.
    pub fn new(backend: Option<Arc<dyn ChatBackend>>) -> Self {
        Self { backend }
    }

    /// Create from environment variables. Without `OPENAI_API_KEY` the
    /// service runs on templates.
    pub fn from_env() -> Result<Self> {
        let config = OpenAIConfig::from_env();
        if config.api_key.is_none() {
            warn!("OPENAI_API_KEY not configured, generation will use canned templates");
            return Ok(Self::new(None));
        }
        Ok(Self::new(Some(Arc::new(OpenAIBackend::new(config)?))))
    }

    /// Whether the primary model backend is available.
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    fn degraded(question: &str, documents: &[RetrievedDocument]) -> GeneratedSummary {
        let summary = select_template(question, documents);
        let sources = extract_citations(&summary, documents);
        GeneratedSummary { summary, sources }
    }
}

#[async_trait]
impl SummaryGenerator for SummaryService {
    async fn generate(
        &self,
        question: &str,
        documents: &[RetrievedDocument],
    ) -> Result<GeneratedSummary> {
        let Some(backend) = &self.backend else {
            debug!(degraded = true, "No model backend, using template");
            return Ok(Self::degraded(question, documents));
        };

        let user_prompt = build_user_prompt(question, documents);
        match backend.complete(SYSTEM_PROMPT, &user_prompt).await {
            Ok(summary) => {
                // An empty completion from a live provider is a generation
                // failure, not a degrade trigger.
                if summary.trim().is_empty() {
                    return Err(Error::Generation(
                        "Model returned an empty summary".to_string(),
                    ));
                }
                let sources = extract_citations(&summary, documents);
                debug!(
                    citation_count = sources.len(),
                    response_len = summary.len(),
                    "Primary generation succeeded"
                );
                Ok(GeneratedSummary { summary, sources })
            }
            Err(e) => {
                warn!(error = %e, "Model call failed, using template");
                Ok(Self::degraded(question, documents))
            }
        }
    }
}
