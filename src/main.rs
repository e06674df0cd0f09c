//! colorweb binary entrypoint.
//!
//! Starts the Tokio runtime, resolves the environment configuration and
//! launches the web server. Keep this file minimal — application logic
//! lives in `server`, `config`, and `html`.
//!
use colorweb::{config::ServerConfig, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("colorweb=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    server::run(config).await
}
