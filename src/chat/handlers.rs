use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    auth::MaybeUser,
    error::{parse_body, ApiError},
    state::AppState,
};

use super::client::ChatMessage;
use super::interpreter::{classify_proposal, interpret_completion};
use super::prompt::SYSTEM_PROMPT;

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub history: Vec<ChatMessage>,
}

#[instrument(skip(state, user, body))]
pub async fn chat(
    State(state): State<AppState>,
    user: MaybeUser,
    Json(body): Json<Value>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let user = user.require()?;
    let body: ChatRequestBody = parse_body(body)?;

    let mut messages = Vec::with_capacity(body.history.len() + 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend(body.history);
    messages.push(ChatMessage::user(body.message));

    let raw = state.chat.complete(&messages).await?;
    let reply = interpret_completion(&raw);

    if let Some(data) = &reply.data {
        debug!(user_id = %user.id, kind = ?classify_proposal(data), "chat proposed a payload");
    }

    let mut history = messages;
    history.push(ChatMessage::assistant(raw));

    Ok(Json(ChatResponseBody {
        message: reply.message,
        data: reply.data,
        history,
    }))
}
