//! Helmet registry server.
//!
//! Main entry point that wires the crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use helmet_core::config::{AppConfig, StoreBackend};
use helmet_core::error::AppError;
use helmet_database::{DatabasePool, HelmetStore, InMemoryHelmetStore};
use helmet_service::HelmetService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("HELMET_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.server.environment,
        "Starting helmet registry"
    );

    // ── Step 1: Store ────────────────────────────────────────────
    let (store, db_pool): (Arc<dyn HelmetStore>, Option<DatabasePool>) =
        match config.database.backend {
            StoreBackend::Postgres => {
                let db_pool = DatabasePool::connect(&config.database).await?;
                (Arc::new(db_pool.helmet_repository()), Some(db_pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory helmet store; data will not persist");
                (Arc::new(InMemoryHelmetStore::new()), None)
            }
        };

    // ── Step 2: Services and router ──────────────────────────────
    let helmet_service = HelmetService::new(store);
    let app_state = helmet_api::AppState::new(config.server.clone(), helmet_service);
    let app = helmet_api::build_router(app_state);

    // ── Step 3: Serve ────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Helmet registry listening");

    helmet_api::serve(
        listener,
        app,
        shutdown_signal(),
        Duration::from_secs(config.server.shutdown_grace_seconds),
    )
    .await?;

    // ── Step 4: Release resources ────────────────────────────────
    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Helmet registry shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
