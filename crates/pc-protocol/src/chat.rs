use serde::{Deserialize, Serialize};

/// Inbound body for `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Visitor's message. Optional at the wire level so a missing field can
    /// be reported as a client error rather than a deserialization failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The message if it contains anything besides whitespace.
    pub fn non_blank_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Which generation path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyMode {
    /// Generated by the language-model backend.
    AiPowered,
    /// Taken from the fixed keyword rule table.
    RuleBased,
}

impl ReplyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiPowered => "ai-powered",
            Self::RuleBased => "rule-based",
        }
    }
}

impl std::fmt::Display for ReplyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound body for a successful `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub mode: ReplyMode,
    /// Backend model identifier, only present on AI-powered replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatReply {
    pub fn ai_powered(reply: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            mode: ReplyMode::AiPowered,
            model: Some(model.into()),
        }
    }

    pub fn rule_based(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            mode: ReplyMode::RuleBased,
            model: None,
        }
    }
}
