//! Conversation memory port.
//!
//! This module defines the `MemoryStore` trait that the infrastructure layer
//! implements to persist chat turns against a session and to search them
//! back, plus the type-erased `BoxMemoryStore`.

pub mod box_store;
pub mod store;

pub use box_store::BoxMemoryStore;
pub use store::MemoryStore;
