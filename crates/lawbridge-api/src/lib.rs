//! HTTP surface for the lawbridge legal Q&A service.
//!
//! The router is built here rather than in `main.rs` so integration tests
//! can drive it in-process with injected pipeline doubles.

pub mod error;
pub mod handlers;
pub mod ratelimit;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use lawbridge_core::{DocumentRetriever, RateLimiter, SummaryGenerator};

pub use error::ApiError;
pub use ratelimit::{FixedWindowLimiter, RateLimitPolicy};

/// Default request body ceiling; bodies above it are rejected before
/// parsing. Override with `MAX_BODY_BYTES`.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

fn max_body_bytes() -> usize {
    std::env::var("MAX_BODY_BYTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_BODY_BYTES)
}

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation and debugging production incidents.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Shared pipeline state. Each stage sits behind a trait so tests can swap
/// in doubles without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub retriever: Arc<dyn DocumentRetriever>,
    pub generator: Arc<dyn SummaryGenerator>,
    pub limiter: Arc<dyn RateLimiter>,
    pub result_limit: usize,
}

/// Parse the CORS origin whitelist from `CORS_ALLOWED_ORIGINS`
/// (comma-separated). Unset or empty falls back to localhost dev origins.
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let parsed: Vec<HeaderValue> = origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse().ok()
        })
        .collect();

    if parsed.is_empty() {
        return vec![
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ];
    }
    parsed
}

/// Build the application router with the full middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/search",
            post(handlers::search_handler).get(handlers::search_method_not_allowed),
        )
        .route("/health", get(handlers::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer({
            let allowed_origins = parse_allowed_origins();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(std::time::Duration::from_secs(3600))
        })
        .layer(RequestBodyLimitLayer::new(max_body_bytes()))
        .with_state(state)
}
