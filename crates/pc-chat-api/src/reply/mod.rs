//! Reply generation for chat messages.
//!
//! Two tiers:
//! - **AI-powered**: a generative backend (Ollama), used when a fresh
//!   probe says it is reachable.
//! - **Rule-based** (local): ordered keyword patterns with a catch-all,
//!   always able to answer.

pub mod mock;
pub mod resolver;
pub mod rules;

use async_trait::async_trait;
use pc_ollama::{BackendResult, Generation, OllamaClient};

/// A generative text service the resolver can delegate to.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Bounded reachability check. Must not error.
    async fn probe(&self) -> bool;

    /// Generate a reply to the visitor's message.
    async fn generate(&self, message: &str) -> BackendResult<Generation>;

    /// Backend name (for logging).
    fn backend_name(&self) -> &str;
}

#[async_trait]
impl GenerativeBackend for OllamaClient {
    async fn probe(&self) -> bool {
        OllamaClient::probe(self).await
    }

    async fn generate(&self, message: &str) -> BackendResult<Generation> {
        OllamaClient::generate(self, message).await
    }

    fn backend_name(&self) -> &str {
        "ollama"
    }
}

pub use mock::MockBackend;
pub use resolver::Resolver;
pub use rules::{Rule, RuleTable};
