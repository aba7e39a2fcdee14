use thiserror::Error;

/// Errors from the knowledge-base (vector search) collaborator.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base request failed: {0}")]
    Transport(String),

    #[error("knowledge base returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode knowledge base response: {0}")]
    Decode(String),
}

/// Errors from the conversation memory collaborator.
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("memory request failed: {0}")]
    Transport(String),

    #[error("memory store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode memory response: {0}")]
    Decode(String),
}

/// A session id was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("session id must not be empty")]
pub struct EmptySessionId;

/// Errors raised while loading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
