use configs::AppConfig;
use service::items::MemoryItemStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolves when Ctrl+C is received. If the handler cannot be installed the
/// server simply runs until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app with a fresh in-memory store and serve it
/// until Ctrl+C.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = ServerState::new(MemoryItemStore::shared(), &config);
    let app = routes::build_router(state, build_cors());

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(source) => {
            let err = StartupError::Bind { addr, source };
            err.log();
            return Err(err.into());
        }
    };
    info!(addr = %listener.local_addr()?, mode = %config.mode, "starting crud server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
