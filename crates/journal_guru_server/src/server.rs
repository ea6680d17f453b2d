//! Listener lifecycle for the relay.

use crate::{GENERATE_PATH, RelayConfig, RelayService, create_router};
use journal_guru_error::{ConfigError, HttpError, JournalGuruResult};
use journal_guru_models::{AnthropicClient, TextGenerator};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// A bound relay, ready to serve.
pub struct RelayServer {
    listener: TcpListener,
    relay: Arc<RelayService>,
}

impl RelayServer {
    /// Binds the configured address with the Anthropic provider.
    pub async fn bind(config: &RelayConfig) -> JournalGuruResult<Self> {
        if config.uses_placeholder_key() {
            warn!("Relay is running with a placeholder API key");
        }
        let client = AnthropicClient::new(config.anthropic_config()?)
            .map_err(|e| ConfigError::new(format!("Failed to create provider client: {}", e)))?;
        Self::bind_with(&config.bind_addr(), Arc::new(client)).await
    }

    /// Binds an address with any provider.
    pub async fn bind_with(
        addr: &str,
        generator: Arc<dyn TextGenerator>,
    ) -> JournalGuruResult<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| HttpError::bind(addr, e))?;
        Ok(Self {
            listener,
            relay: Arc::new(RelayService::new(generator)),
        })
    }

    /// Address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> JournalGuruResult<SocketAddr> {
        Ok(self
            .listener
            .local_addr()
            .map_err(|e| HttpError::new(e.to_string()))?)
    }

    /// Serves until `shutdown` resolves.
    pub async fn serve_until<F>(self, shutdown: F) -> JournalGuruResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("Journal Guru relay running on http://{}", addr);
        info!("API endpoint: http://{}{}", addr, GENERATE_PATH);

        axum::serve(self.listener, create_router(self.relay))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HttpError::serve(e))?;

        info!("Relay stopped");
        Ok(())
    }

    /// Serves until Ctrl+C.
    pub async fn serve(self) -> JournalGuruResult<()> {
        self.serve_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            info!("Shutting down relay...");
        })
        .await
    }
}
