//! HTTP server exposing the metrics endpoint and a landing page.

use std::net::SocketAddr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::metrics::MetricsSnapshot;

const LANDING_PAGE: &str = r#"<html>
    <head>
        <title>omada_exporter</title>
    </head>
    <body>
        <h1>omada_exporter</h1>
        <p>
            <a href="/metrics">Metrics</a>
        </p>
    </body>
</html>"#;

#[derive(Clone)]
struct AppState {
    snapshot: Arc<ArcSwap<MetricsSnapshot>>,
}

/// Builds the router serving `/` and `/metrics`.
///
/// Handlers only read the currently published snapshot; a failing backend
/// scrape shows up as stale data, never as an error response.
pub fn router(snapshot: Arc<ArcSwap<MetricsSnapshot>>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(AppState { snapshot })
}

async fn index_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.snapshot.load().encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                "content-type",
                "application/openmetrics-text; version=1.0.0; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to encode metrics: {err}"),
        )
            .into_response(),
    }
}

/// Binds the listen address and serves until the process exits.
pub async fn serve(
    addr: SocketAddr,
    snapshot: Arc<ArcSwap<MetricsSnapshot>>,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(snapshot)).await
}
