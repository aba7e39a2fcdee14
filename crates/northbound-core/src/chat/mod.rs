//! Conversational retrieval flow.
//!
//! `RetrievalResponder` turns a message into a reply using the knowledge base
//! (with static fallbacks), and `ChatService` wraps it with session
//! resolution and turn persistence.

pub mod fallback;
pub mod responder;
pub mod service;

pub use responder::{Grounding, Reply, RetrievalResponder};
pub use service::{ChatOutcome, ChatService};
