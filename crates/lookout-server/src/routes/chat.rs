//! Chat assistant route: `POST /api/chat`

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use lookout_core::chat::{self, ChatReply};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

/// Build the chat router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat", post(reply))
}

async fn reply(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    let reply = chat::reply_for(&request.message);
    tracing::debug!(topic = reply.topic, "chat reply");
    Ok(Json(reply))
}
