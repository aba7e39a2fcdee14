//! KnowledgeBase trait definition.

use std::sync::Arc;

use northbound_types::error::KnowledgeBaseError;
use northbound_types::search::SearchResult;

/// Trait for semantic similarity search over a named corpus.
///
/// Implementations live in northbound-infra (e.g., `ZeroDbClient`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait KnowledgeBase: Send + Sync {
    /// Return up to `top_k` passages similar to `query`, most relevant first.
    fn search_similar_text(
        &self,
        corpus: &str,
        query: &str,
        top_k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, KnowledgeBaseError>> + Send;
}

/// Shared handles delegate, so one client can back several services.
impl<T: KnowledgeBase> KnowledgeBase for Arc<T> {
    async fn search_similar_text(
        &self,
        corpus: &str,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, KnowledgeBaseError> {
        (**self).search_similar_text(corpus, query, top_k).await
    }
}
