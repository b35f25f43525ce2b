//! Request handlers for the search pipeline.
//!
//! `POST /search` runs the whole pipeline in order: rate limit → body
//! parse → validate → retrieve → generate → assemble. Strictly
//! sequential; generation depends on retrieval's output and nothing
//! branches back.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info, warn};

use lawbridge_core::{sanitize_question, SearchRequest, SearchResponse};

use crate::error::{ApiError, MSG_INVALID_FORMAT, MSG_METHOD_NOT_ALLOWED};
use crate::AppState;

/// Best-effort client key for rate limiting: forwarded-IP headers, trivially
/// spoofable, no authenticated identity.
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

/// `POST /search` — answer a legal question with citations.
pub async fn search_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let key = client_key(&headers);
    if !state.limiter.admit(&key) {
        warn!(client_key = %key, "Rate limit exceeded");
        return Err(ApiError::RateLimited);
    }

    // Malformed JSON gets a fixed 400, not a framework rejection body.
    let Json(request) = payload.map_err(|_| ApiError::BadRequest(MSG_INVALID_FORMAT.to_string()))?;

    let question = sanitize_question(request.question.as_deref())?;
    let category = request.category.unwrap_or_default();

    info!(
        query = %question,
        category = category.as_str(),
        "Searching for legal documents"
    );

    let documents = state
        .retriever
        .retrieve(&question, category, state.result_limit)
        .await;

    // Unreachable while the degraded retriever guarantees a non-empty
    // fallback; kept so an empty corpus still fails loudly.
    if documents.is_empty() {
        return Err(ApiError::NotFound);
    }

    debug!(
        result_count = documents.len(),
        "Documents retrieved, generating summary"
    );

    let generated = state.generator.generate(&question, &documents).await?;

    if generated.summary.is_empty() {
        return Err(ApiError::GenerationFailed);
    }

    Ok(Json(SearchResponse {
        summary: generated.summary,
        sources: generated.sources,
    }))
}

/// `GET /search` — the endpoint is POST-only.
pub async fn search_method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": MSG_METHOD_NOT_ALLOWED })),
    )
}

/// `GET /health` — liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_key_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_key(&headers), "10.0.0.1");
    }

    #[test]
    fn test_client_key_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_key(&headers), "10.0.0.2");
    }

    #[test]
    fn test_client_key_unknown_without_headers() {
        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn test_client_key_ignores_empty_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("   "));
        assert_eq!(client_key(&headers), "unknown");
    }
}
