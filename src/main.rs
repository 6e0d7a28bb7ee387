use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use hotel_core::app_state::build_app_state;
use hotel_core::config::AppConfig;
use hotel_core::core::auth::token_registry::TokenRegistry;
use hotel_core::core::persistence::db;
use hotel_core::logging;
use hotel_core::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    // Keep the guard alive so buffered file logs get flushed on exit.
    let _log_guard = logging::init(&config.log)?;

    info!("Connecting to database at {}", config.database.url);
    let pool = db::connect(&config.database).await?;
    db::migrate(&pool).await?;

    let tokens = TokenRegistry::parse(&config.api_tokens)?;
    if tokens.is_empty() {
        tracing::warn!("HOTEL_API_TOKENS is empty; every protected endpoint will reject writes");
    }

    let app = app_router(build_app_state(pool, tokens));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 Hotel API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
