//! HTTP server initialization and runtime setup.
//!
//! Handles snapshot restore, the periodic snapshot task, and the Axum server
//! lifecycle including the final snapshot on shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryStore;
use crate::infrastructure::snapshot::{RestoreOutcome, SnapshotError, SnapshotManager};
use crate::routes::app_router;
use crate::state::{AppState, SharedStore};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

enum Exit {
    Server(std::io::Result<()>),
    Snapshot(Result<(), SnapshotError>),
}

/// Creates the store and fills it from the configured snapshot file.
///
/// # Errors
///
/// Returns an error if the snapshot file exists but cannot be parsed.
pub fn restore_store(manager: &SnapshotManager) -> Result<SharedStore> {
    let store: SharedStore = Arc::new(InMemoryStore::new());

    let outcome = manager
        .restore(store.as_ref())
        .with_context(|| format!("Failed to restore {}", manager.path().display()))?;

    match outcome {
        RestoreOutcome::Missing | RestoreOutcome::Empty => {
            tracing::info!("Starting with an empty store");
        }
        RestoreOutcome::Restored(entries) => {
            tracing::info!(entries, "Store restored from snapshot");
        }
    }

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory store, restored from the snapshot file
/// - Background snapshot task
/// - Axum HTTP server
///
/// On Ctrl-C or SIGTERM the server drains, the snapshot task is stopped and
/// one last snapshot is written.
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot file is malformed
/// - Server bind fails
/// - Server runtime error occurs
/// - A periodic snapshot fails while `SNAPSHOT_FAIL_FAST` is set
pub async fn run(config: Config) -> Result<()> {
    let manager = SnapshotManager::new(&config.snapshot_path, config.snapshot_interval())
        .with_failure_policy(config.save_failure_policy());

    let store = restore_store(&manager)?;

    let mut snapshot_task = manager.spawn_periodic(store.clone());
    tracing::info!(
        interval_ms = manager.interval().as_millis() as u64,
        "Snapshot task started"
    );

    let state = AppState::new(store.clone(), config.short_url_domain.clone());
    let app = app_router(state);

    let bind_addr = if config.listen_addr.starts_with(':') {
        format!("0.0.0.0{}", config.listen_addr)
    } else {
        config.listen_addr.clone()
    };
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    let server = async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal())
            .await
    };

    let exit = tokio::select! {
        result = server => Exit::Server(result),
        result = snapshot_task.wait() => Exit::Snapshot(result),
    };

    match exit {
        Exit::Server(result) => {
            if let Err(e) = snapshot_task.shutdown().await {
                tracing::error!(error = %e, "Snapshot task ended with error");
            }

            match manager.flush(store).await {
                Ok(entries) => tracing::info!(entries, "Final snapshot saved"),
                Err(e) => tracing::error!(error = %e, "Failed to save final snapshot"),
            }

            result?;
            tracing::info!("Server stopped");
            Ok(())
        }
        Exit::Snapshot(result) => {
            result.context("Snapshot task failed")?;
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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

    tracing::info!("Shutdown signal received");
}
