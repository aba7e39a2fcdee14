//! Business logic and port trait definitions for the Northbound chat service.
//!
//! This crate defines the "ports" (knowledge base, memory store, session id
//! source) that the infrastructure layer implements, plus the session
//! resolver, the retrieval responder and the chat service that composes them.
//! It depends only on `northbound-types` -- never on `northbound-infra` or any
//! HTTP crate.

pub mod chat;
pub mod knowledge;
pub mod memory;
pub mod session;
