//! Core traits for lawbridge abstractions.
//!
//! These traits define the seams between the HTTP layer and the pluggable
//! backends, enabling offline fallbacks and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GeneratedSummary, LegalCategory, RetrievedDocument};

/// Retrieves documents relevant to a sanitized question.
///
/// Implementations must never fail for provider errors: a broken or
/// unconfigured provider degrades to a curated offline corpus, so the
/// contract is an ordered list, most relevant first.
#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    async fn retrieve(
        &self,
        question: &str,
        category: LegalCategory,
        limit: usize,
    ) -> Vec<RetrievedDocument>;
}

/// Generates a plain-language summary with citations from retrieved
/// documents.
///
/// Returns `Err(Error::Generation)` only when the primary model produced an
/// empty summary; provider failures are handled internally by degrading to
/// canned templates.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(
        &self,
        question: &str,
        documents: &[RetrievedDocument],
    ) -> Result<GeneratedSummary>;
}

/// One-shot chat completion backend (system prompt + user prompt → text).
///
/// The low-level seam under [`SummaryGenerator`]: the real implementation
/// talks to an OpenAI-compatible endpoint, the mock returns fixtures.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Per-client admission control.
///
/// The policy (window length, request budget) belongs to the
/// implementation's configuration, not this interface.
pub trait RateLimiter: Send + Sync {
    /// Decide whether the request from `key` is admitted. Implementations
    /// must count atomically per key so concurrent requests from the same
    /// client cannot undercount.
    fn admit(&self, key: &str) -> bool;
}
