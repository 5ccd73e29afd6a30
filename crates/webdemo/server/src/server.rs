//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::{AppIdentity, AppState};
use crate::build_info::BuildProperties;
use crate::config::ServiceConfig;
use crate::error::{ServerError, ServerResult};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// webdemo HTTP server
pub struct Server {
    config: ServiceConfig,
    state: AppState,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: ServiceConfig) -> Self {
        let identity = AppIdentity::from_config(&config.app);
        let build = config.build.expose.then(BuildProperties::current);
        let state = AppState::new(identity, build);

        Self { config, state }
    }

    /// Shared application state handed to the router
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> ServerResult<()> {
        let addr = self.config.server.listen_addr;
        let app = create_router(self.state().clone(), &self.config.server);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("webdemo listening on {}", addr);
        tracing::info!(
            app_id = %self.state.identity.id,
            build_info = self.state.build.is_some(),
            "Application identity"
        );

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

        tracing::info!("webdemo shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
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
