//! Web server module for colorweb.
//!
//! Builds the axum router around an injected `ServerConfig` and runs it on
//! a plain TCP listener. The greeting handler is stateless: it only reads
//! the immutable config captured at startup, so no locking is needed under
//! any request concurrency.
//!
use std::{net::SocketAddr, sync::Arc};

use axum::{Router, extract::State, response::Html, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{config::ServerConfig, html::greeting_page};

/// Build the application router with the config injected as shared state.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(greeting))
        .with_state(Arc::new(config))
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve requests until the process is terminated.
///
/// A failed bind (e.g. port already in use) is fatal and propagates out.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        "🌐 Server running on port {} - {} version",
        config.port, config.color
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Respond to `GET /` with the rendered greeting
async fn greeting(State(config): State<Arc<ServerConfig>>) -> Html<String> {
    Html(greeting_page(&config.color))
}
