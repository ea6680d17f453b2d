//! Relay endpoint for Journal Guru.
//!
//! Validates a [`GenerationRequest`](journal_guru_core::GenerationRequest),
//! renders the journaling instruction, makes exactly one provider call and
//! hands back the first text artifact.
//!
//! - [`RelayService`] - the transport-independent relay operation
//! - [`create_router`] - axum routes for `/api/generate-prompts` and `/api/health`
//! - [`RelayConfig`] - environment-driven startup settings
//! - [`RelayServer`] - bind and serve until shutdown

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod relay;
mod response;
mod server;

pub use api::{GENERATE_PATH, HEALTH_PATH, create_router};
pub use config::{PLACEHOLDER_API_KEY, RelayConfig, RelayConfigBuilder};
pub use relay::{MAX_OUTPUT_TOKENS, MODEL_ID, RelayService};
pub use response::{ErrorBody, HealthBody, RelayFailure};
pub use server::RelayServer;
