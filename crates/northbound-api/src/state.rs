//! Application state wiring the chat service to its collaborators.
//!
//! The chat service is generic over its ports; AppState pins it to boxed
//! ports so the HTTP layer and tests can plug in any implementation.

use std::sync::Arc;

use northbound_core::chat::{ChatService, RetrievalResponder};
use northbound_core::knowledge::BoxKnowledgeBase;
use northbound_core::memory::BoxMemoryStore;
use northbound_infra::zerodb::ZeroDbClient;
use northbound_types::config::ServerConfig;

pub type ConcreteChatService = ChatService<BoxKnowledgeBase, BoxMemoryStore>;

/// Shared application state, used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the ZeroDB client and wire it in as both knowledge base and
    /// memory store.
    pub fn init(config: ServerConfig) -> anyhow::Result<Self> {
        let zerodb = Arc::new(ZeroDbClient::new(&config.zerodb)?);
        if config.zerodb.api_key.is_none() {
            tracing::warn!("No ZeroDB API key configured; requests will be unauthenticated");
        }

        let responder = RetrievalResponder::new(
            BoxKnowledgeBase::new(Arc::clone(&zerodb)),
            config.chat.corpus.clone(),
        );
        let chat_service = ChatService::new(responder, BoxMemoryStore::new(zerodb));

        tracing::debug!(
            corpus = %config.chat.corpus,
            base_url = %config.zerodb.base_url,
            "Chat service initialized"
        );

        Ok(Self::from_parts(chat_service, config))
    }

    pub fn from_parts(chat_service: ConcreteChatService, config: ServerConfig) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        }
    }
}
