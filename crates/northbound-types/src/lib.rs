//! Shared domain types for the Northbound chat service.
//!
//! This crate contains the domain types used across the workspace:
//! chat turns, session identifiers, knowledge-base search results,
//! stored memory records, service configuration and error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod memory;
pub mod search;
