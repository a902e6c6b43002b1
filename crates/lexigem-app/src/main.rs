use std::sync::Arc;

use lexigem_config::Config;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod page;
pub mod routes;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = Config::new();
    tracing::debug!("{config:?}");

    let addr = config.server.socket_addr();
    let state = Arc::new(AppState::new(&config)?);
    let app = routes::router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
