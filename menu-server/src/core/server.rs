//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::core::{Config, Result, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with oneshot)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("🍽️ Menu server listening on {}", addr);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `signal` resolves.
    ///
    /// In-flight requests get `shutdown_timeout_ms` to finish after the
    /// signal; after that the server returns anyway.
    pub async fn serve<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Create application state if not provided
        let state = match self.state {
            Some(s) => s,
            None => ServerState::initialize(&self.config).await?,
        };

        let app = build_app(&state).with_state(state);
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);

        let triggered = Arc::new(Notify::new());
        let notify = triggered.clone();
        let shutdown = async move {
            signal.await;
            tracing::info!("Shutting down...");
            notify.notify_one();
        };

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown);

        tokio::select! {
            result = server => result?,
            _ = async {
                triggered.notified().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(grace_ms = grace.as_millis() as u64, "Graceful shutdown timed out");
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
