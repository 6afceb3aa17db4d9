//! Chat server configuration, loadable from TOML and the environment.

use anyhow::Context;
use pc_ollama::OllamaConfig;
use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Generative backend settings. Optional, defaults to a local Ollama.
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl ChatConfig {
    /// Defaults, then the TOML file named by `CHAT_CONFIG`, then env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let base = match std::env::var("CHAT_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config file {path}"))?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `OLLAMA_*` overrides from `lookup`.
    ///
    /// Values that fail to parse are ignored and the current value kept.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        override_parsed(&lookup, "PORT", &mut self.port);

        if let Some(url) = lookup("OLLAMA_URL") {
            self.ollama.base_url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.ollama.model = model;
        }
        override_parsed(
            &lookup,
            "OLLAMA_PROBE_TIMEOUT_MS",
            &mut self.ollama.probe_timeout_ms,
        );
        override_parsed(
            &lookup,
            "OLLAMA_GENERATE_TIMEOUT_SECS",
            &mut self.ollama.generate_timeout_secs,
        );
        if let Some(raw) = lookup("OLLAMA_ENABLED") {
            match parse_flag(&raw) {
                Some(enabled) => self.ollama.enabled = enabled,
                None => tracing::warn!(value = %raw, "ignoring unparseable OLLAMA_ENABLED"),
            }
        }
        self
    }

    /// `host:port` for the TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn override_parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring unparseable config override"),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}
