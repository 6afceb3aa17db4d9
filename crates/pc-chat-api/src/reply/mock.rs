//! Mock generative backend for testing without a running Ollama.
//!
//! The probe result and generation outcome are fixed at construction;
//! every call is counted for assertion in tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pc_ollama::{BackendError, BackendResult, Generation};

use super::GenerativeBackend;

/// Mock implementation of the `GenerativeBackend` trait.
pub struct MockBackend {
    reachable: bool,
    outcome: BackendResult<Generation>,
    probes: AtomicUsize,
    generations: AtomicUsize,
}

impl MockBackend {
    /// Reachable and answers every message with `text`.
    pub fn answering(text: &str, model: &str) -> Self {
        Self::new(
            true,
            Ok(Generation {
                text: text.into(),
                model: model.into(),
            }),
        )
    }

    /// Reachable, but every generation fails with `error`.
    pub fn failing(error: BackendError) -> Self {
        Self::new(true, Err(error))
    }

    /// Probe reports the backend as down.
    pub fn unreachable() -> Self {
        Self::new(false, Err(BackendError::Transport("connection refused".into())))
    }

    fn new(reachable: bool, outcome: BackendResult<Generation>) -> Self {
        Self {
            reachable,
            outcome,
            probes: AtomicUsize::new(0),
            generations: AtomicUsize::new(0),
        }
    }

    /// Number of probe calls so far.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// Number of generate calls so far.
    pub fn generate_count(&self) -> usize {
        self.generations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn probe(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.reachable
    }

    async fn generate(&self, _message: &str) -> BackendResult<Generation> {
        self.generations.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
