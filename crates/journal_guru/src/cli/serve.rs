//! Relay server command handler.

use super::ServeArgs;
use journal_guru_error::JournalGuruResult;
use journal_guru_server::{RelayConfig, RelayServer};

/// Handle the `serve` command
pub async fn handle_serve_command(args: ServeArgs) -> JournalGuruResult<()> {
    tracing::info!("Starting Journal Guru relay");

    let config = RelayConfig::from_env()?.with_bind(args.host, args.port);
    tracing::debug!(config = ?config, "Relay configuration loaded");

    let server = RelayServer::bind(&config).await?;
    tracing::info!("Relay ready. Press Ctrl+C to stop.");
    server.serve().await
}
