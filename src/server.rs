use std::sync::Arc;

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::info;

use crate::auth::ApiKey;
use crate::config::AppConfig;
use crate::database::MongoStore;
use crate::state::AppState;

/// Connect to MongoDB, bind the listener and serve until SIGINT/SIGTERM
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting Voxara NBFC backend in {:?} mode", config.environment);

    let store = MongoStore::connect(&config.database)
        .await
        .context("failed to create MongoDB client")?;
    let state = AppState::new(Arc::new(store), ApiKey::new(&config.security.api_key));

    let app = crate::app(state, &config);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
