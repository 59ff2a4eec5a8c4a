//! BaristaLog - brewing journal server binary

use std::{net::SocketAddr, sync::Arc};

use barista_log::{create_app, AppState, Config, JournalStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "barista_server=debug,barista_log=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting BaristaLog server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Default language: {}", config.journal.default_language);

    let store = JournalStore::open(config.storage.snapshot_path()).await?;

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
