mod auth;
mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod router;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use datastore::SnapshotStore;
use tokens::TokenKeeper;
use tokio::net::TcpListener;

use config::Config;
use router::create_router;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting roost gateway");

    let cfg = Config::from_env()?;

    let store = Arc::new(SnapshotStore::open(&cfg.db_path));
    store.ensure_exists()?;
    tracing::info!(path = %cfg.db_path.display(), "snapshot store ready");

    let keeper = TokenKeeper::new(cfg.jwt_secret.as_bytes());
    let state = AppState::new(store, keeper, &cfg.api_key);

    let app = create_router(state, &cfg.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
