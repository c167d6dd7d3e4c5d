//! Serving the router until shutdown.

use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use helmet_core::error::AppError;
use helmet_core::result::AppResult;

/// Serve `app` on `listener` until `shutdown` resolves, then let in-flight
/// requests drain for at most `grace` before dropping their connections.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stopping_tx, mut stopping_rx) = watch::channel(false);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = stopping_tx.send(true);
        })
        .into_future();

    let deadline = async move {
        match stopping_rx.wait_for(|stopping| *stopping).await.map(drop) {
            Ok(_) => tokio::time::sleep(grace).await,
            // Sender gone without a signal: the server already returned.
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))
        }
        () = deadline => {
            tracing::warn!(
                grace_ms = grace.as_millis() as u64,
                "Shutdown grace period elapsed, dropping open connections"
            );
            Ok(())
        }
    }
}
