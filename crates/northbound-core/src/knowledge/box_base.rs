//! BoxKnowledgeBase -- object-safe dynamic dispatch wrapper for KnowledgeBase.
//!
//! 1. Define an object-safe `KnowledgeBaseDyn` trait with boxed futures
//! 2. Blanket-impl `KnowledgeBaseDyn` for all `T: KnowledgeBase`
//! 3. `BoxKnowledgeBase` wraps `Box<dyn KnowledgeBaseDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use northbound_types::error::KnowledgeBaseError;
use northbound_types::search::SearchResult;

use super::base::KnowledgeBase;

/// Object-safe version of [`KnowledgeBase`] with boxed futures.
pub trait KnowledgeBaseDyn: Send + Sync {
    fn search_similar_text_boxed<'a>(
        &'a self,
        corpus: &'a str,
        query: &'a str,
        top_k: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchResult>, KnowledgeBaseError>> + Send + 'a>>;
}

impl<T: KnowledgeBase> KnowledgeBaseDyn for T {
    fn search_similar_text_boxed<'a>(
        &'a self,
        corpus: &'a str,
        query: &'a str,
        top_k: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchResult>, KnowledgeBaseError>> + Send + 'a>>
    {
        Box::pin(self.search_similar_text(corpus, query, top_k))
    }
}

/// Type-erased knowledge base for runtime selection.
///
/// Lets the API layer hold one concrete service type while tests swap in
/// in-process fakes.
pub struct BoxKnowledgeBase {
    inner: Box<dyn KnowledgeBaseDyn + Send + Sync>,
}

impl BoxKnowledgeBase {
    /// Wrap a concrete `KnowledgeBase` in a type-erased box.
    pub fn new<T: KnowledgeBase + 'static>(knowledge_base: T) -> Self {
        Self {
            inner: Box::new(knowledge_base),
        }
    }
}

impl KnowledgeBase for BoxKnowledgeBase {
    async fn search_similar_text(
        &self,
        corpus: &str,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, KnowledgeBaseError> {
        self.inner
            .search_similar_text_boxed(corpus, query, top_k)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoKnowledgeBase;

    impl KnowledgeBase for EchoKnowledgeBase {
        async fn search_similar_text(
            &self,
            corpus: &str,
            query: &str,
            top_k: usize,
        ) -> Result<Vec<SearchResult>, KnowledgeBaseError> {
            Ok(vec![SearchResult {
                document: Some(format!("{corpus}:{query}:{top_k}")),
                ..SearchResult::default()
            }])
        }
    }

    #[tokio::test]
    async fn test_box_knowledge_base_delegates() {
        let boxed = BoxKnowledgeBase::new(EchoKnowledgeBase);
        let results = boxed.search_similar_text("kb", "hello", 3).await.unwrap();
        assert_eq!(results[0].document.as_deref(), Some("kb:hello:3"));
    }
}
