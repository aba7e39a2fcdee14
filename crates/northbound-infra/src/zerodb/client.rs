//! ZeroDbClient -- concrete knowledge base and memory store over the ZeroDB REST API.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building request headers. Keys that look like a JWT are sent as a
//! bearer token, anything else as `X-API-Key`.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use northbound_core::knowledge::KnowledgeBase;
use northbound_core::memory::MemoryStore;
use northbound_types::chat::{ChatTurn, SessionId};
use northbound_types::config::ZeroDbConfig;
use northbound_types::error::{ConfigError, KnowledgeBaseError, MemoryError};
use northbound_types::memory::MemoryRecord;
use northbound_types::search::{SearchResponse, SearchResult};

use super::types::{
    SearchMemoryRequest, SearchTextRequest, StoreMemoryMetadata, StoreMemoryRequest,
    memory_records,
};

/// Role recorded on every stored memory; the stored content is the user message.
const MEMORY_ROLE: &str = "user";

/// How the API key is presented to ZeroDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScheme {
    Bearer,
    ApiKey,
}

impl AuthScheme {
    /// JWTs (base64 of `{"...`) start with `eyJ`.
    fn for_key(key: &str) -> Self {
        if key.starts_with("eyJ") {
            AuthScheme::Bearer
        } else {
            AuthScheme::ApiKey
        }
    }
}

/// ZeroDB REST client.
///
/// Does not derive `Debug`, so the key cannot leak through formatting.
pub struct ZeroDbClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    project_id: String,
    agent_id: String,
}

impl ZeroDbClient {
    /// Build a client from configuration.
    pub fn new(config: &ZeroDbConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "zerodb".to_string(),
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: config
                .api_key
                .as_ref()
                .filter(|k| !k.is_empty())
                .map(|k| SecretString::from(k.clone())),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            agent_id: config.agent_id.clone(),
        })
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn memory_url(&self, action: &str) -> String {
        self.url(&format!(
            "/projects/{}/database/memory/{action}",
            self.project_id
        ))
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.post(url);
        match &self.api_key {
            Some(key) => {
                let key = key.expose_secret();
                match AuthScheme::for_key(key) {
                    AuthScheme::Bearer => request.bearer_auth(key),
                    AuthScheme::ApiKey => request.header("X-API-Key", key),
                }
            }
            None => request,
        }
    }
}

impl KnowledgeBase for ZeroDbClient {
    async fn search_similar_text(
        &self,
        corpus: &str,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, KnowledgeBaseError> {
        let body = SearchTextRequest {
            collection_name: corpus,
            query_text: query,
            top_k,
        };

        let response = self
            .post(&self.url("/v1/public/zerodb/vectors/search/text"))
            .json(&body)
            .send()
            .await
            .map_err(|e| KnowledgeBaseError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KnowledgeBaseError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| KnowledgeBaseError::Decode(e.to_string()))?;

        tracing::debug!(corpus, results = parsed.results.len(), "ZeroDB text search complete");
        Ok(parsed.results)
    }
}

impl MemoryStore for ZeroDbClient {
    async fn store_memory(&self, turn: &ChatTurn) -> Result<(), MemoryError> {
        let body = StoreMemoryRequest {
            agent_id: &self.agent_id,
            session_id: turn.session_id.as_str(),
            content: &turn.message,
            role: MEMORY_ROLE,
            metadata: StoreMemoryMetadata {
                response: &turn.response,
                message_type: turn.message_type.as_str(),
            },
        };

        let response = self
            .post(&self.memory_url("store"))
            .json(&body)
            .send()
            .await
            .map_err(|e| MemoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MemoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    async fn search_memory(
        &self,
        session_id: &SessionId,
        query: &str,
        limit: usize,
    ) -> Result<Vec<MemoryRecord>, MemoryError> {
        let body = SearchMemoryRequest {
            query,
            session_id: session_id.as_str(),
            limit,
        };

        let response = self
            .post(&self.memory_url("search"))
            .json(&body)
            .send()
            .await
            .map_err(|e| MemoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MemoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MemoryError::Decode(e.to_string()))?;

        Ok(memory_records(&raw))
    }
}
