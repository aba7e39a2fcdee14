//! ZeroDB REST API request/response types.
//!
//! These are wire structures for the ZeroDB endpoints. They are NOT the
//! domain types from northbound-types -- those are backend-agnostic.

use serde::Serialize;
use serde_json::Value;

use northbound_types::memory::MemoryRecord;

/// Body of `POST /v1/public/zerodb/vectors/search/text`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchTextRequest<'a> {
    pub collection_name: &'a str,
    pub query_text: &'a str,
    pub top_k: usize,
}

/// Body of `POST /projects/{project_id}/database/memory/store`.
///
/// The user message is stored as `content`; the reply rides in metadata.
#[derive(Debug, Clone, Serialize)]
pub struct StoreMemoryRequest<'a> {
    pub agent_id: &'a str,
    pub session_id: &'a str,
    pub content: &'a str,
    pub role: &'static str,
    pub metadata: StoreMemoryMetadata<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreMemoryMetadata<'a> {
    pub response: &'a str,
    pub message_type: &'a str,
}

/// Body of `POST /projects/{project_id}/database/memory/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMemoryRequest<'a> {
    pub query: &'a str,
    pub session_id: &'a str,
    pub limit: usize,
}

/// Pull memory records out of a memory search response.
///
/// The entries may sit under `memories`, under `results`, or be the top-level
/// array. Entries without string content are skipped.
pub fn memory_records(body: &Value) -> Vec<MemoryRecord> {
    let entries = body
        .get("memories")
        .or_else(|| body.get("results"))
        .unwrap_or(body)
        .as_array();

    entries
        .map(|items| items.iter().filter_map(MemoryRecord::from_raw).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_text_request_shape() {
        let body = serde_json::to_value(SearchTextRequest {
            collection_name: "blaq_knowledge_base",
            query_text: "what do you do?",
            top_k: 3,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "collection_name": "blaq_knowledge_base",
                "query_text": "what do you do?",
                "top_k": 3
            })
        );
    }

    #[test]
    fn test_store_memory_request_shape() {
        let body = serde_json::to_value(StoreMemoryRequest {
            agent_id: "blaq-chatbot",
            session_id: "abc123",
            content: "hello",
            role: "user",
            metadata: StoreMemoryMetadata {
                response: "hi there",
                message_type: "chatbot",
            },
        })
        .unwrap();
        assert_eq!(body["metadata"]["response"], "hi there");
        assert_eq!(body["metadata"]["message_type"], "chatbot");
        assert_eq!(body["role"], "user");
    }

    #[test]
    fn test_memory_records_accepts_known_envelopes() {
        let entry = json!({ "content": "hello", "metadata": { "response": "hi" } });
        assert_eq!(memory_records(&json!({ "memories": [entry.clone()] })).len(), 1);
        assert_eq!(memory_records(&json!({ "results": [entry.clone()] })).len(), 1);
        assert_eq!(memory_records(&json!([entry])).len(), 1);
        assert!(memory_records(&json!({ "status": "ok" })).is_empty());
    }

    #[test]
    fn test_memory_records_skips_entries_without_content() {
        let records = memory_records(&json!({
            "memories": [{ "content": "kept" }, { "role": "user" }]
        }));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "kept");
    }
}
