//! HTTP layer for the chat widget.
//!
//! Axum router exposing `/api/chat` (session-cookie scoped) and `/health`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod session_cookie;
