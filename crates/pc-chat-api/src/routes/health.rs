//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use pc_protocol::HealthReport;

use crate::state::AppState;

/// GET /health: liveness plus the mode a chat request would use now.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let mode = state.resolver.current_mode().await;
    Json(HealthReport::ok(mode, env!("CARGO_PKG_VERSION")))
}
