//! Shared test harness for E2E integration tests.
//!
//! Wires the chat router to a real `OllamaClient` pointed at a wiremock
//! server standing in for Ollama, exercising the full request path.

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pc_chat_api::routes::build_router;
use pc_chat_api::state::AppState;
use pc_ollama::OllamaConfig;

/// End-to-end harness: router + mock Ollama.
pub struct TestHarness {
    /// Mock Ollama HTTP server.
    pub ollama: MockServer,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness with short timeouts (probe 300ms, generate 1s).
    pub async fn start() -> Self {
        let ollama = MockServer::start().await;
        let config = OllamaConfig {
            base_url: ollama.uri(),
            model: "llama3".into(),
            probe_timeout_ms: 300,
            generate_timeout_secs: 1,
            enabled: true,
        };
        Self::with_config(ollama, config)
    }

    /// Harness whose backend is switched off in configuration.
    pub async fn disabled() -> Self {
        let ollama = MockServer::start().await;
        let config = OllamaConfig {
            base_url: ollama.uri(),
            enabled: false,
            ..OllamaConfig::default()
        };
        Self::with_config(ollama, config)
    }

    fn with_config(ollama: MockServer, config: OllamaConfig) -> Self {
        let router = build_router(AppState::with_ollama(config));
        Self { ollama, router }
    }

    /// Make `/api/tags` answer 200 with a model list.
    pub async fn mount_tags_ok(&self) {
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "models": [{ "name": "llama3:latest" }]
            })))
            .mount(&self.ollama)
            .await;
    }

    /// Make `/api/tags` answer with `status` and no body.
    pub async fn mount_tags_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.ollama)
            .await;
    }

    /// Make `/api/generate` answer with `text`, expecting `times` calls.
    pub async fn mount_generate(&self, text: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "llama3",
                "response": text,
                "done": true
            })))
            .expect(times)
            .mount(&self.ollama)
            .await;
    }

    /// Make `/api/generate` respond with an arbitrary template.
    pub async fn mount_generate_template(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(template)
            .mount(&self.ollama)
            .await;
    }

    /// A `/api/generate` template that outlasts the 1s generate timeout.
    pub fn slow_generate() -> ResponseTemplate {
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "response": "too late" }))
            .set_delay(Duration::from_secs(5))
    }

    /// POST /chat with a JSON message. Returns (status, body).
    pub async fn chat(&self, message: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "message": message });
        self.chat_raw(&serde_json::to_string(&body).unwrap()).await
    }

    /// POST /chat with a raw body.
    pub async fn chat_raw(&self, body: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::post("/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// GET /health.
    pub async fn health(&self) -> (StatusCode, serde_json::Value) {
        self.send(Request::get("/health").body(Body::empty()).unwrap())
            .await
    }

    /// Send any request through the router.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// Number of requests Ollama received on `endpoint`.
    pub async fn ollama_hits(&self, endpoint: &str) -> usize {
        self.ollama
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == endpoint)
            .count()
    }
}
