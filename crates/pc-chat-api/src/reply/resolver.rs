//! Tiered reply resolution: backend first when reachable, rules otherwise.
//!
//! Availability is probed fresh on every call. A failed generation is
//! logged and dropped; the rule table always answers, so `resolve` cannot
//! fail. The returned mode names the tier that actually produced the text.

use std::sync::Arc;

use pc_protocol::{ChatReply, ReplyMode};

use super::GenerativeBackend;
use super::rules::RuleTable;

/// Composite resolver over a generative backend and a rule table.
pub struct Resolver {
    backend: Arc<dyn GenerativeBackend>,
    rules: RuleTable,
}

impl Resolver {
    /// Resolver with the built-in portfolio rule table.
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self::with_rules(backend, RuleTable::portfolio().clone())
    }

    pub fn with_rules(backend: Arc<dyn GenerativeBackend>, rules: RuleTable) -> Self {
        Self { backend, rules }
    }

    /// Mode a message would be answered in right now.
    pub async fn current_mode(&self) -> ReplyMode {
        if self.backend.probe().await {
            ReplyMode::AiPowered
        } else {
            ReplyMode::RuleBased
        }
    }

    /// Produce a reply for a non-blank message.
    pub async fn resolve(&self, message: &str) -> ChatReply {
        if self.backend.probe().await {
            match self.backend.generate(message).await {
                Ok(generation) => {
                    return ChatReply::ai_powered(generation.text, generation.model);
                }
                Err(e) => {
                    tracing::warn!(
                        backend = self.backend.backend_name(),
                        error = %e,
                        "generation failed, falling back to rule table"
                    );
                }
            }
        } else {
            tracing::debug!(
                backend = self.backend.backend_name(),
                "backend unreachable, using rule table"
            );
        }

        let hit = self.rules.lookup(message);
        tracing::debug!(topic = hit.topic, "rule matched");
        ChatReply::rule_based(hit.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::MockBackend;
    use pc_ollama::BackendError;

    fn resolver(backend: &Arc<MockBackend>) -> Resolver {
        Resolver::new(backend.clone())
    }

    #[tokio::test]
    async fn available_backend_answers() {
        let backend = Arc::new(MockBackend::answering("Generated answer", "llama3"));
        let reply = resolver(&backend).resolve("tell me about aws").await;

        assert_eq!(reply.mode, ReplyMode::AiPowered);
        assert_eq!(reply.reply, "Generated answer");
        assert_eq!(reply.model.as_deref(), Some("llama3"));
        assert_eq!(backend.probe_count(), 1);
        assert_eq!(backend.generate_count(), 1);
    }

    #[tokio::test]
    async fn unreachable_backend_never_generates() {
        let backend = Arc::new(MockBackend::unreachable());
        let reply = resolver(&backend).resolve("hello").await;

        assert_eq!(reply.mode, ReplyMode::RuleBased);
        assert!(reply.reply.starts_with("Hello! I'm Rayhan's assistant."));
        assert!(reply.model.is_none());
        assert_eq!(backend.generate_count(), 0);
    }

    #[tokio::test]
    async fn generation_timeout_falls_back() {
        let backend = Arc::new(MockBackend::failing(BackendError::Timeout));
        let reply = resolver(&backend).resolve("what are your rates?").await;

        assert_eq!(reply.mode, ReplyMode::RuleBased);
        assert_eq!(reply.reply, RuleTable::portfolio().reply_for("what are your rates?"));
        assert!(reply.model.is_none());
        assert_eq!(backend.generate_count(), 1);
    }

    #[tokio::test]
    async fn server_error_falls_back() {
        let backend = Arc::new(MockBackend::failing(BackendError::Status(500)));
        let reply = resolver(&backend).resolve("anything at all").await;
        assert_eq!(reply.mode, ReplyMode::RuleBased);
    }

    #[tokio::test]
    async fn malformed_payload_falls_back() {
        let backend = Arc::new(MockBackend::failing(BackendError::Malformed(
            "missing field `response`".into(),
        )));
        let reply = resolver(&backend).resolve("docker").await;
        assert_eq!(reply.mode, ReplyMode::RuleBased);
        assert!(reply.reply.contains("Kubernetes cluster setup"));
    }

    #[tokio::test]
    async fn unknown_text_gets_default_reply() {
        let backend = Arc::new(MockBackend::unreachable());
        let reply = resolver(&backend).resolve("qwerty uiop").await;
        assert_eq!(reply.mode, ReplyMode::RuleBased);
        assert!(reply.reply.starts_with("I can help you learn about:"));
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let backend = Arc::new(MockBackend::unreachable());
        let resolver = resolver(&backend);
        let first = resolver.resolve("Can I hire him?").await;
        let second = resolver.resolve("Can I hire him?").await;
        assert_eq!(first, second);
        assert_eq!(backend.probe_count(), 2);
    }

    #[tokio::test]
    async fn current_mode_follows_probe() {
        let up = Resolver::new(Arc::new(MockBackend::answering("x", "llama3")));
        assert_eq!(up.current_mode().await, ReplyMode::AiPowered);

        let down = Resolver::new(Arc::new(MockBackend::unreachable()));
        assert_eq!(down.current_mode().await, ReplyMode::RuleBased);
    }
}
