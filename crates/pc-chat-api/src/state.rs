//! Shared application state for the Axum server.
//!
//! Read-only after startup: handlers share the resolver and never mutate it.

use std::sync::Arc;

use pc_ollama::{OllamaClient, OllamaConfig};

use crate::reply::{GenerativeBackend, Resolver};

/// Shared application state, cheap to clone into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Tiered reply resolver (backend + rule table).
    pub resolver: Arc<Resolver>,
}

impl AppState {
    /// State backed by an Ollama client built from `config`.
    pub fn with_ollama(config: OllamaConfig) -> Self {
        Self::with_backend(Arc::new(OllamaClient::new(config)))
    }

    /// State over any backend (tests inject a `MockBackend`).
    pub fn with_backend(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            resolver: Arc::new(Resolver::new(backend)),
        }
    }
}
