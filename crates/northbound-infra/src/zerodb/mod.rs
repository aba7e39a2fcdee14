//! ZeroDB (AINative) REST integration.
//!
//! A single [`ZeroDbClient`] implements both the [`KnowledgeBase`] and the
//! [`MemoryStore`] ports, since both live behind the same API and key.
//!
//! [`KnowledgeBase`]: northbound_core::knowledge::KnowledgeBase
//! [`MemoryStore`]: northbound_core::memory::MemoryStore

pub mod client;
pub mod types;

pub use client::ZeroDbClient;
