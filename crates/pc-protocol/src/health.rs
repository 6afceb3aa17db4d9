use serde::{Deserialize, Serialize};

use crate::chat::ReplyMode;

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Always "ok" while the process is serving.
    pub status: String,
    /// Mode a chat request would use right now.
    pub mode: ReplyMode,
    /// Server crate version.
    pub version: String,
}

impl HealthReport {
    pub fn ok(mode: ReplyMode, version: impl Into<String>) -> Self {
        Self {
            status: "ok".into(),
            mode,
            version: version.into(),
        }
    }
}
