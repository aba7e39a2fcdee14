//! Chat turn, message type and session identifier types.
//!
//! A `ChatTurn` is created once per inbound chat request and handed to the
//! memory collaborator after the reply has been computed. Session continuity
//! is carried entirely by the client-held `SessionId` cookie.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::EmptySessionId;

/// Prefix shared by every freshly minted session identifier.
pub const SESSION_ID_PREFIX: &str = "session_";

/// Requested response flavour for a chat message.
///
/// Anything other than `rag` on the wire is treated as `chatbot`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Chatbot,
    Rag,
}

impl MessageType {
    /// Mapping used at the HTTP boundary: only the exact string `"rag"`
    /// selects RAG mode.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("rag") => MessageType::Rag,
            _ => MessageType::Chatbot,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Chatbot => "chatbot",
            MessageType::Rag => "rag",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chatbot" => Ok(MessageType::Chatbot),
            "rag" => Ok(MessageType::Rag),
            other => Err(format!("invalid message type: '{other}'")),
        }
    }
}

/// Opaque session token carried in the `session_id` cookie.
///
/// Freshly minted ids look like `session_<epoch-millis>_<suffix>`; ids reused
/// from a cookie are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing token. Returns `None` for an empty string.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        Self::try_from(value.into()).ok()
    }

    /// Build a fresh id from its time and random parts.
    pub fn minted(epoch_millis: i64, suffix: &str) -> Self {
        Self(format!("{SESSION_ID_PREFIX}{epoch_millis}_{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this id has the shape of a freshly minted one.
    pub fn is_minted_format(&self) -> bool {
        let Some(rest) = self.0.strip_prefix(SESSION_ID_PREFIX) else {
            return false;
        };
        let Some((millis, suffix)) = rest.split_once('_') else {
            return false;
        };
        !millis.is_empty()
            && millis.chars().all(|c| c.is_ascii_digit())
            && !suffix.is_empty()
            && suffix.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl TryFrom<String> for SessionId {
    type Error = EmptySessionId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err(EmptySessionId)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One user message and the reply it received, keyed by session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub session_id: SessionId,
    pub message: String,
    pub response: String,
    pub message_type: MessageType,
}
