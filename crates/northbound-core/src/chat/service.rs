//! Chat service orchestrating one conversational turn.
//!
//! ChatService resolves the session, asks the retrieval responder for a reply
//! and hands the finished turn to the memory store. Persistence is
//! best-effort: a failed write is logged and the reply is returned anyway.

use tracing::{info, warn};

use northbound_types::chat::{ChatTurn, MessageType, SessionId};
use northbound_types::memory::MemoryRecord;

use crate::chat::responder::{Reply, RetrievalResponder};
use crate::knowledge::KnowledgeBase;
use crate::memory::MemoryStore;
use crate::session::{SessionIdSource, SessionResolver, SystemSessionIdSource};

/// Result of handling one chat message.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Session the turn was recorded under; the caller sets it back as a cookie.
    pub session_id: SessionId,
    pub reply: Reply,
}

/// Composes session resolution, retrieval and turn persistence.
///
/// Generic over `KnowledgeBase` and `MemoryStore` to maintain clean
/// architecture (northbound-core never depends on northbound-infra).
pub struct ChatService<K: KnowledgeBase, M: MemoryStore, S: SessionIdSource = SystemSessionIdSource>
{
    resolver: SessionResolver<S>,
    responder: RetrievalResponder<K>,
    memory: M,
}

impl<K: KnowledgeBase, M: MemoryStore> ChatService<K, M, SystemSessionIdSource> {
    /// Create a chat service minting session ids from the system clock.
    pub fn new(responder: RetrievalResponder<K>, memory: M) -> Self {
        Self::with_resolver(SessionResolver::system(), responder, memory)
    }
}

impl<K: KnowledgeBase, M: MemoryStore, S: SessionIdSource> ChatService<K, M, S> {
    pub fn with_resolver(
        resolver: SessionResolver<S>,
        responder: RetrievalResponder<K>,
        memory: M,
    ) -> Self {
        Self {
            resolver,
            responder,
            memory,
        }
    }

    /// Access the retrieval responder.
    pub fn responder(&self) -> &RetrievalResponder<K> {
        &self.responder
    }

    /// Access the memory store.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Resolve the session id for a request's cookie value.
    pub fn resolve_session(&self, cookie_value: Option<&str>) -> SessionId {
        self.resolver.resolve(cookie_value)
    }

    /// Handle one validated, non-empty message.
    ///
    /// Never fails: knowledge-base errors degrade to fallback replies and
    /// memory errors are only logged.
    pub async fn handle_message(
        &self,
        cookie_value: Option<&str>,
        message: &str,
        mode: MessageType,
    ) -> ChatOutcome {
        let session_id = self.resolve_session(cookie_value);
        let reply = self.responder.answer(message, mode).await;

        let turn = ChatTurn {
            session_id: session_id.clone(),
            message: message.to_string(),
            response: reply.text.clone(),
            message_type: mode,
        };

        match self.memory.store_memory(&turn).await {
            Ok(()) => info!(
                session_id = %session_id,
                mode = %mode,
                grounding = %reply.grounding,
                "Chat turn stored"
            ),
            Err(e) => warn!(
                session_id = %session_id,
                error = %e,
                "Failed to store chat turn, replying anyway"
            ),
        }

        ChatOutcome { session_id, reply }
    }

    /// Previously stored turns of a session, or an empty list if the memory
    /// store cannot be reached.
    pub async fn history(
        &self,
        session_id: &SessionId,
        query: &str,
        limit: usize,
    ) -> Vec<MemoryRecord> {
        match self.memory.search_memory(session_id, query, limit).await {
            Ok(records) => records,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Failed to load chat history");
                Vec::new()
            }
        }
    }
}
