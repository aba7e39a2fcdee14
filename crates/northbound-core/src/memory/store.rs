//! MemoryStore trait definition.
//!
//! The store is append-only from this service's point of view: turns are
//! written once and only ever searched afterwards.

use std::sync::Arc;

use northbound_types::chat::{ChatTurn, SessionId};
use northbound_types::error::MemoryError;
use northbound_types::memory::MemoryRecord;

/// Trait for session-keyed conversation memory.
///
/// Implementations live in northbound-infra (e.g., `ZeroDbClient`).
pub trait MemoryStore: Send + Sync {
    /// Persist one completed chat turn.
    fn store_memory(
        &self,
        turn: &ChatTurn,
    ) -> impl std::future::Future<Output = Result<(), MemoryError>> + Send;

    /// Search stored turns of a session. An empty `query` matches everything.
    fn search_memory(
        &self,
        session_id: &SessionId,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<MemoryRecord>, MemoryError>> + Send;
}

impl<T: MemoryStore> MemoryStore for Arc<T> {
    async fn store_memory(&self, turn: &ChatTurn) -> Result<(), MemoryError> {
        (**self).store_memory(turn).await
    }

    async fn search_memory(
        &self,
        session_id: &SessionId,
        query: &str,
        limit: usize,
    ) -> Result<Vec<MemoryRecord>, MemoryError> {
        (**self).search_memory(session_id, query, limit).await
    }
}
