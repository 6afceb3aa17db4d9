//! Client for a locally hosted Ollama server.
//!
//! Two calls are exposed:
//! - **probe**: `GET /api/tags` under a short timeout, collapsed to a bool.
//! - **generate**: `POST /api/generate` (non-streaming) under a longer
//!   timeout, returning an explicit `BackendResult` so callers decide how
//!   to degrade.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{Generation, OllamaClient};
pub use config::OllamaConfig;
pub use error::{BackendError, BackendResult};
