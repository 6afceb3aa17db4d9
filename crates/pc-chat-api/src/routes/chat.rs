//! Chat endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use pc_protocol::{ChatReply, ChatRequest};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /chat: answer a visitor message.
///
/// Unreadable bodies and missing or blank messages are rejected with 400
/// before the resolver runs.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected chat body");
        ApiError::message_required()
    })?;

    let message = req.non_blank_message().ok_or_else(|| {
        tracing::debug!("chat message missing or blank");
        ApiError::message_required()
    })?;

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("chat", %request_id);
    let reply = async {
        let reply = state.resolver.resolve(message).await;
        tracing::info!(mode = %reply.mode, chars = message.chars().count(), "chat answered");
        reply
    }
    .instrument(span)
    .await;

    Ok(Json(reply))
}

/// Any non-POST method on /chat.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
