//! Ollama endpoint configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OllamaConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model to generate with.
    #[serde(default = "default_model")]
    pub model: String,
    /// Reachability probe timeout in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Generation timeout in seconds.
    #[serde(default = "default_generate_timeout_secs")]
    pub generate_timeout_secs: u64,
    /// When false the backend is never contacted.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_base_url() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "llama3".into()
}
fn default_probe_timeout_ms() -> u64 {
    2_000
}
fn default_generate_timeout_secs() -> u64 {
    30
}
fn default_enabled() -> bool {
    true
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            probe_timeout_ms: default_probe_timeout_ms(),
            generate_timeout_secs: default_generate_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

impl OllamaConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    /// Join an API path onto the base URL, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
