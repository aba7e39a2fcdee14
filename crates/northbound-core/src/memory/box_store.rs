//! BoxMemoryStore -- object-safe dynamic dispatch wrapper for MemoryStore.
//!
//! Same blanket-impl pattern as `BoxKnowledgeBase`.

use std::future::Future;
use std::pin::Pin;

use northbound_types::chat::{ChatTurn, SessionId};
use northbound_types::error::MemoryError;
use northbound_types::memory::MemoryRecord;

use super::store::MemoryStore;

/// Object-safe version of [`MemoryStore`] with boxed futures.
pub trait MemoryStoreDyn: Send + Sync {
    fn store_memory_boxed<'a>(
        &'a self,
        turn: &'a ChatTurn,
    ) -> Pin<Box<dyn Future<Output = Result<(), MemoryError>> + Send + 'a>>;

    fn search_memory_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
        query: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<MemoryRecord>, MemoryError>> + Send + 'a>>;
}

impl<T: MemoryStore> MemoryStoreDyn for T {
    fn store_memory_boxed<'a>(
        &'a self,
        turn: &'a ChatTurn,
    ) -> Pin<Box<dyn Future<Output = Result<(), MemoryError>> + Send + 'a>> {
        Box::pin(self.store_memory(turn))
    }

    fn search_memory_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
        query: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<MemoryRecord>, MemoryError>> + Send + 'a>> {
        Box::pin(self.search_memory(session_id, query, limit))
    }
}

/// Type-erased memory store for runtime selection.
pub struct BoxMemoryStore {
    inner: Box<dyn MemoryStoreDyn + Send + Sync>,
}

impl BoxMemoryStore {
    /// Wrap a concrete `MemoryStore` in a type-erased box.
    pub fn new<T: MemoryStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }
}

impl MemoryStore for BoxMemoryStore {
    async fn store_memory(&self, turn: &ChatTurn) -> Result<(), MemoryError> {
        self.inner.store_memory_boxed(turn).await
    }

    async fn search_memory(
        &self,
        session_id: &SessionId,
        query: &str,
        limit: usize,
    ) -> Result<Vec<MemoryRecord>, MemoryError> {
        self.inner.search_memory_boxed(session_id, query, limit).await
    }
}
