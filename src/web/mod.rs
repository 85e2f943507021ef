//! HTTP server

use std::num::NonZeroU16;
use std::sync::Arc;

use axum::Router;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::card::FontCache;
use crate::fetch::Fetcher;
use crate::provider::ProviderRegistry;

mod ping;

use ping::ping_handler;

/// Everything a request needs, shared between requests.
#[derive(Clone, Debug)]
pub struct AppState {
    providers: Arc<ProviderRegistry>,
    fetcher: Fetcher,
    fonts: Arc<FontCache>,
    seed: Option<u64>,
}

impl AppState {
    /// Bundles the request dependencies. With a `seed` every card gets the same background.
    pub fn new(
        providers: ProviderRegistry,
        fetcher: Fetcher,
        fonts: FontCache,
        seed: Option<u64>,
    ) -> Self {
        Self {
            providers: Arc::new(providers),
            fetcher,
            fonts: Arc::new(fonts),
            seed,
        }
    }

    /// A fresh generator for one request.
    fn request_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(rand::random))
    }
}

/// The application routes.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/ping", axum::routing::get(ping_handler))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Binds to `listen_addr:port` and serves until Ctrl-C.
pub async fn setup_server(
    listen_addr: &str,
    port: NonZeroU16,
    state: AppState,
) -> Result<(), anyhow::Error> {
    let app = create_router().with_state(state);

    let addr = format!("{}:{}", listen_addr, port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", err);
    }
    Ok(())
}
