//! Stored conversation memory as returned by the memory collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::MessageType;

/// A previously stored chat turn.
///
/// The user message is stored as `content`; the reply and the message type
/// travel in the record's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl MemoryRecord {
    /// Build a record from one raw memory entry.
    ///
    /// Returns `None` when the entry has no string `content`. Unknown message
    /// types are dropped rather than failing the whole entry.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let content = raw.get("content")?.as_str()?.to_string();
        let metadata = raw.get("metadata");
        let response = metadata
            .and_then(|m| m.get("response"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let message_type = metadata
            .and_then(|m| m.get("message_type"))
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok());
        let created_at = raw
            .get("created_at")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            content,
            response,
            message_type,
            created_at,
        })
    }
}
