//! Portfolio chat API: HTTP entry point.
//!
//! Serves `POST /chat` and `GET /health`, answering through a local Ollama
//! when reachable and the keyword rule table otherwise.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pc_chat_api::config::ChatConfig;
use pc_chat_api::routes::build_router;
use pc_chat_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pc-chat-api starting");

    let config = ChatConfig::load()?;

    if config.ollama.enabled {
        tracing::info!(
            url = %config.ollama.base_url,
            model = %config.ollama.model,
            "ollama backend configured"
        );
    } else {
        tracing::warn!("ollama disabled, answering from the rule table only");
    }

    let state = AppState::with_ollama(config.ollama.clone());
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
