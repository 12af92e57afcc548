//! HTTP boundary exposing the dispatcher as a JSON API.
//!
//! - `GET /health`
//! - `POST /api/cipher` with a [`TransformRequest`](crate::TransformRequest)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Binds `host:port` from `config` and serves the API until the process
/// exits.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = routes::router(AppState::new(config));

    tracing::info!("Starting classicrypt-server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
