//! blog-api: In-memory blog CRUD service
//!
//! A single ordered collection of blogs lives in process memory and is
//! served over HTTP:
//! - `store`: the collection and its operations
//! - `api`: axum router and handlers
//! - `config`: TOML configuration with defaults
//! - `logging`: tracing subscriber setup
//!
//! Nothing is persisted; the collection resets on restart.

pub mod api;
pub mod config;
pub mod logging;
pub mod store;

pub use api::{create_router, AppState, SharedState};
pub use config::{Config, DeleteMode};
pub use store::{Blog, BlogPayload, BlogStore, StoreError};

use std::sync::Arc;

use tracing::{error, info};

/// Build the shared state described by a config
pub fn build_state(config: &Config) -> SharedState {
    let store = if config.store.seed {
        BlogStore::seeded()
    } else {
        BlogStore::new()
    };
    Arc::new(AppState::new(store, config.store.delete_mode))
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
///
/// A handler that fails to register is logged and never fires, so the
/// server keeps running rather than shutting down straight away.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutting down...");
}
