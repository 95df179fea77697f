use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::ApiError,
    protocol::{contact_route, healthz_route, ContactReceipt, ContactSubmission},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod settings;

use api::{accept_contact, RelayContext};
use settings::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let settings = load_settings()?;
    let addr = settings.socket_addr()?;
    let max_body_bytes = settings.max_body_bytes;
    let app = build_router(Arc::new(RelayContext::new(&settings)), max_body_bytes);

    info!(%addr, max_body_bytes, "contact relay listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("contact relay shutting down");
        })
        .await?;
    Ok(())
}

/// Filter from `RUST_LOG`-style directives, `info` when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn build_router(ctx: Arc<RelayContext>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(healthz_route(), get(healthz))
        .route(contact_route(), post(submit_contact))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(ctx)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn submit_contact(
    State(ctx): State<Arc<RelayContext>>,
    Json(req): Json<ContactSubmission>,
) -> Result<Json<ContactReceipt>, (StatusCode, Json<ApiError>)> {
    accept_contact(&ctx, &req.message)
        .map(Json)
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, Json(err)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
