//! Chat handlers for the website widget.
//!
//! `POST /api/chat` answers one message inside the caller's session and
//! refreshes the `session_id` cookie. `GET /api/chat` returns what has been
//! stored for that session so far.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use northbound_types::chat::{MessageType, SessionId};
use northbound_types::memory::MemoryRecord;
use northbound_types::search::SearchResult;

use crate::http::error::AppError;
use crate::http::session_cookie::{session_cookie, session_from_jar};
use crate::state::AppState;

const MESSAGE_REQUIRED: &str = "Message is required";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub session_id: SessionId,
    pub metadata: ChatResponseMetadata,
    pub sources: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseMetadata {
    pub has_relevant_content: bool,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub sources_count: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Optional search text; empty returns the most recent turns.
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub session_id: SessionId,
    pub history: Vec<MemoryRecord>,
}

/// Pull `message` and `type` out of a raw JSON body.
///
/// A missing, non-string or empty message is a 400. A body that is not JSON
/// at all is a 500.
fn parse_chat_body(body: &[u8]) -> Result<(String, MessageType), AppError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse chat request body");
        AppError::Internal(e.to_string())
    })?;

    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation(MESSAGE_REQUIRED.to_string()))?;
    let mode = MessageType::from_wire(payload.get("type").and_then(Value::as_str));

    Ok((message.to_string(), mode))
}

/// POST /api/chat
pub async fn send_message(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<ChatResponse>), AppError> {
    let (message, mode) = parse_chat_body(&body)?;
    let cookie_value = session_from_jar(&jar);

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!(
        "chat.request",
        %request_id,
        message_type = %mode,
        returning = cookie_value.is_some(),
    );
    let outcome = state
        .chat_service
        .handle_message(cookie_value.as_deref(), &message, mode)
        .instrument(span)
        .await;

    let jar = jar.add(session_cookie(
        &outcome.session_id,
        state.config.server.secure_cookies,
    ));
    let reply = outcome.reply;

    Ok((
        jar,
        Json(ChatResponse {
            metadata: ChatResponseMetadata {
                has_relevant_content: reply.has_relevant_content(),
                message_type: mode,
                sources_count: reply.sources.len(),
            },
            response: reply.text,
            session_id: outcome.session_id,
            sources: reply.sources,
        }),
    ))
}

/// GET /api/chat
pub async fn get_history(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let session_id = session_from_jar(&jar)
        .and_then(SessionId::new)
        .ok_or(AppError::NoSession)?;

    let history = state
        .chat_service
        .history(
            &session_id,
            query.q.as_deref().unwrap_or_default(),
            state.config.chat.history_limit,
        )
        .await;

    Ok(Json(HistoryResponse {
        session_id,
        history,
    }))
}
