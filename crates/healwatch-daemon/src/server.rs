//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use healwatch_engine::{builtin_cases, load_suite};
use tokio::net::TcpListener;

/// HealWatch healing backend
pub struct Server {
    config: DaemonConfig,
    state: AppState,
}

impl Server {
    /// Create a new server, loading the configured suite
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let suite = match &config.suite.path {
            Some(path) => {
                let cases = load_suite(path)?;
                tracing::info!(path = %path.display(), cases = cases.len(), "Loaded healing suite");
                cases
            }
            None => builtin_cases(),
        };

        let state = AppState::new(suite, config.tracker.clone());

        Ok(Self { config, state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let app = create_router(self.state.clone(), self.config.server.enable_cors);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("HealWatch daemon listening on {}", addr);
        tracing::info!(
            suite_size = self.state.suite.len(),
            cors = self.config.server.enable_cors,
            "Serving healing API"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("HealWatch daemon shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
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
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
