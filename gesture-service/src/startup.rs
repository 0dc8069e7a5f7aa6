//! Application startup and lifecycle management.

use crate::config::{GestureConfig, StoreBackend};
use crate::models::{Entity, Gesture, VoiceCommand};
use crate::services::{DocumentStore, MemoryStore, MongoDb};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    config: GestureConfig,
}

impl Application {
    /// Open the configured store and bind the HTTP listener.
    ///
    /// With the MongoDB backend an unreachable database aborts startup.
    pub async fn build(config: GestureConfig) -> Result<Self, AppError> {
        if config.store.backend == StoreBackend::Memory {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            return Self::with_store(config, Arc::new(MemoryStore::new())).await;
        }

        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        db.health_check().await?;

        db.initialize_indexes(&[Gesture::COLLECTION, VoiceCommand::COLLECTION])
            .await
            .map_err(|e| {
                tracing::error!("Failed to initialize database indexes: {}", e);
                e
            })?;

        Self::with_store(config, Arc::new(db)).await
    }

    /// Bind the HTTP listener around an already constructed store.
    pub async fn with_store(
        config: GestureConfig,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Gesture service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(store),
            config,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state, &self.config.cors);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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

    tracing::info!("Shutdown signal received");
}
