//! HTTP calls against the Ollama API.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::config::OllamaConfig;
use crate::error::{BackendError, BackendResult};
use crate::prompt::build_prompt;

/// Ollama `/api/generate` request body.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama `/api/generate` response (only fields we need).
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    model: Option<String>,
    response: Option<String>,
}

/// A reply produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    /// Model that produced `text`, as reported by the backend or configured.
    pub model: String,
}

/// Client for the Ollama HTTP API.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Build on an existing connection pool.
    pub fn with_client(client: reqwest::Client, config: OllamaConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Check whether the backend answers `/api/tags` within the probe timeout.
    ///
    /// Never fails: refusal, timeout, non-2xx and non-JSON bodies all
    /// collapse to `false`.
    pub async fn probe(&self) -> bool {
        if !self.config.enabled {
            return false;
        }

        let url = self.config.endpoint("/api/tags");
        let response = match self
            .client
            .get(&url)
            .timeout(self.config.probe_timeout())
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(error = %e, url = %url, "ollama probe failed");
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "ollama probe returned non-2xx");
            return false;
        }

        match response.json::<IgnoredAny>().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "ollama probe body unreadable");
                false
            }
        }
    }

    /// Generate a reply to `message` under the persona prompt.
    pub async fn generate(&self, message: &str) -> BackendResult<Generation> {
        if !self.config.enabled {
            return Err(BackendError::Disabled);
        }

        let prompt = build_prompt(message);
        let body = GenerateRequest {
            model: &self.config.model,
            prompt: &prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.config.endpoint("/api/generate"))
            .timeout(self.config.generate_timeout())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        // Body read stays under the request timeout.
        let bytes = response.bytes().await?;
        let parsed: GenerateResponse =
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Malformed(e.to_string()))?;

        let text = parsed
            .response
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| BackendError::Malformed("empty `response` field".into()))?;

        Ok(Generation {
            text: text.trim().to_string(),
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
        })
    }
}
