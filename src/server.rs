//! HTTP server initialization and runtime setup.
//!
//! Builds the selected store, serves the router and drains in-flight requests
//! on SIGINT, SIGTERM, SIGHUP or SIGQUIT.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlStore;
use crate::infrastructure::persistence::{MemoryStore, PgStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The store backend (PostgreSQL pool and migrations, or in-memory maps)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (store, pool) = build_store(&config).await?;
    info!("Store ready ({})", store.backend_name());

    let app = app_router(AppState::new(store));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    serve(listener, app, shutdown_signal()).await?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    info!("Server shut down");
    Ok(())
}

/// Serves `app` until `shutdown` resolves, then waits for in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")
}

/// Creates the configured store. The pool is returned so it can be closed on exit.
async fn build_store(config: &Config) -> Result<(Arc<dyn UrlStore>, Option<PgPool>)> {
    match config.store_backend {
        StoreBackend::Memory => Ok((Arc::new(MemoryStore::new()), None)),
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("Database URL is not configured")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            let store: Arc<dyn UrlStore> = Arc::new(PgStore::new(Arc::new(pool.clone())));
            Ok((store, Some(pool)))
        }
    }
}

/// Resolves when the process receives a termination signal.
pub async fn shutdown_signal() {
    match wait_for_signal().await {
        Ok(name) => info!("Received {}, shutting down", name),
        Err(e) => {
            error!("Failed to install signal handlers: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut hangup = signal(SignalKind::hangup())?;
    let mut quit = signal(SignalKind::quit())?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = hangup.recv() => "SIGHUP",
        _ = quit.recv() => "SIGQUIT",
    };

    Ok(name)
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl-C")
}
