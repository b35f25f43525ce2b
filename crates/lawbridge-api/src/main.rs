//! lawbridge API server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use lawbridge_api::{build_router, AppState, FixedWindowLimiter, RateLimitPolicy};
use lawbridge_inference::SummaryService;
use lawbridge_retrieval::RetrievalService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // RUST_LOG overrides; default keeps our crates chatty and tower quiet-ish.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lawbridge_api=debug,lawbridge_retrieval=debug,lawbridge_inference=debug,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let policy = RateLimitPolicy::from_env();
    info!(
        max_requests = policy.max_requests,
        window_secs = policy.window.as_secs(),
        "Rate limit policy loaded"
    );

    let state = AppState {
        retriever: Arc::new(RetrievalService::from_env()?),
        generator: Arc::new(SummaryService::from_env()?),
        limiter: Arc::new(FixedWindowLimiter::new(policy)),
        result_limit: lawbridge_retrieval::DEFAULT_RESULT_LIMIT,
    };

    let app = build_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
