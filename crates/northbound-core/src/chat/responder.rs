//! Retrieval responder.
//!
//! Three tiers, tried in order:
//! 1. a single high-confidence passage, returned verbatim;
//! 2. the extractable text of the top two passages, blank-line joined;
//! 3. a static fallback chosen by message type.
//!
//! Knowledge-base failures are logged and treated exactly like "no results".

use std::fmt;

use tracing::{Instrument, debug, info_span, warn};

use northbound_types::chat::MessageType;
use northbound_types::search::SearchResult;

use crate::chat::fallback::fallback_reply;
use crate::knowledge::KnowledgeBase;

/// A top passage scoring strictly above this is returned on its own.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Number of passages requested from the knowledge base.
pub const SEARCH_TOP_K: usize = 3;

/// Maximum number of passages blended into one reply.
pub const BLEND_LIMIT: usize = 2;

/// Separator between blended passages.
pub const BLEND_SEPARATOR: &str = "\n\n";

/// Which tier produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grounding {
    HighConfidence,
    Blended,
    Fallback,
}

impl Grounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grounding::HighConfidence => "high_confidence",
            Grounding::Blended => "blended",
            Grounding::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Grounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed reply and the passages it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub grounding: Grounding,
    /// Passages that contributed text. Empty for fallback replies.
    pub sources: Vec<SearchResult>,
}

impl Reply {
    fn fallback(mode: MessageType) -> Self {
        Self {
            text: fallback_reply(mode).to_string(),
            grounding: Grounding::Fallback,
            sources: Vec::new(),
        }
    }

    /// Whether the reply came from the knowledge base rather than a template.
    pub fn has_relevant_content(&self) -> bool {
        self.grounding != Grounding::Fallback
    }
}

/// Apply the ranking policy to one result list.
///
/// Returns `None` when nothing extractable was found, leaving the choice of
/// fallback to the caller.
pub fn select_reply(results: &[SearchResult]) -> Option<Reply> {
    let top = results.first()?;

    if top.score.is_some_and(|score| score > HIGH_CONFIDENCE_THRESHOLD) {
        if let Some(text) = top.preferred_text() {
            return Some(Reply {
                text: text.to_string(),
                grounding: Grounding::HighConfidence,
                sources: vec![top.clone()],
            });
        }
    }

    let (texts, sources): (Vec<&str>, Vec<SearchResult>) = results
        .iter()
        .take(BLEND_LIMIT)
        .filter_map(|r| r.preferred_text().map(|text| (text, r.clone())))
        .unzip();

    if texts.is_empty() {
        return None;
    }

    Some(Reply {
        text: texts.join(BLEND_SEPARATOR),
        grounding: Grounding::Blended,
        sources,
    })
}

/// Answers chat messages from a named knowledge-base corpus.
pub struct RetrievalResponder<K: KnowledgeBase> {
    knowledge_base: K,
    corpus: String,
}

impl<K: KnowledgeBase> RetrievalResponder<K> {
    pub fn new(knowledge_base: K, corpus: impl Into<String>) -> Self {
        Self {
            knowledge_base,
            corpus: corpus.into(),
        }
    }

    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    /// Compute a reply. Never fails: every error path ends in a fallback.
    pub async fn answer(&self, message: &str, mode: MessageType) -> Reply {
        let span = info_span!(
            "retrieval.search",
            corpus = %self.corpus,
            top_k = SEARCH_TOP_K,
            mode = %mode,
        );

        let results = match self
            .knowledge_base
            .search_similar_text(&self.corpus, message, SEARCH_TOP_K)
            .instrument(span)
            .await
        {
            Ok(results) => results,
            Err(e) => {
                warn!(
                    error = %e,
                    corpus = %self.corpus,
                    "Knowledge base search failed, using fallback reply"
                );
                Vec::new()
            }
        };

        let reply = select_reply(&results).unwrap_or_else(|| Reply::fallback(mode));
        debug!(
            results = results.len(),
            top_score = ?results.first().and_then(|r| r.score),
            grounding = %reply.grounding,
            "Reply selected"
        );
        reply
    }

    /// Reply text only.
    pub async fn respond(&self, message: &str, mode: MessageType) -> String {
        self.answer(message, mode).await.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fallback::{CHATBOT_FALLBACK, RAG_FALLBACK};
    use northbound_types::error::KnowledgeBaseError;
    use serde_json::json;
    use std::sync::Mutex;

    /// Knowledge base that returns a canned answer and records its queries.
    struct ScriptedKnowledgeBase {
        outcome: Result<Vec<SearchResult>, String>,
        queries: Mutex<Vec<(String, String, usize)>>,
    }

    impl ScriptedKnowledgeBase {
        fn returning(results: Vec<SearchResult>) -> Self {
            Self {
                outcome: Ok(results),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl KnowledgeBase for ScriptedKnowledgeBase {
        async fn search_similar_text(
            &self,
            corpus: &str,
            query: &str,
            top_k: usize,
        ) -> Result<Vec<SearchResult>, KnowledgeBaseError> {
            self.queries
                .lock()
                .unwrap()
                .push((corpus.to_string(), query.to_string(), top_k));
            self.outcome
                .clone()
                .map_err(KnowledgeBaseError::Transport)
        }
    }

    fn doc(text: &str, score: f64) -> SearchResult {
        SearchResult {
            document: Some(text.to_string()),
            score: Some(score),
            ..SearchResult::default()
        }
    }

    fn responder(kb: ScriptedKnowledgeBase) -> RetrievalResponder<ScriptedKnowledgeBase> {
        RetrievalResponder::new(kb, "blaq_knowledge_base")
    }

    #[tokio::test]
    async fn test_queries_corpus_for_top_three() {
        let r = responder(ScriptedKnowledgeBase::returning(vec![]));
        r.respond("hello", MessageType::Chatbot).await;
        let queries = r.knowledge_base.queries.lock().unwrap();
        assert_eq!(
            queries.as_slice(),
            &[("blaq_knowledge_base".to_string(), "hello".to_string(), 3)]
        );
    }

    #[tokio::test]
    async fn test_high_confidence_returns_top_passage_verbatim() {
        let r = responder(ScriptedKnowledgeBase::returning(vec![
            doc("We build AI systems...", 0.85),
            doc("Other passage", 0.6),
        ]));
        let reply = r.answer("What does Blaq Digital do?", MessageType::Chatbot).await;
        assert_eq!(reply.text, "We build AI systems...");
        assert_eq!(reply.grounding, Grounding::HighConfidence);
        assert_eq!(reply.sources.len(), 1);
        assert!(reply.has_relevant_content());
    }

    #[tokio::test]
    async fn test_threshold_is_strict() {
        let r = responder(ScriptedKnowledgeBase::returning(vec![
            doc("first", 0.7),
            doc("second", 0.5),
        ]));
        let reply = r.answer("q", MessageType::Chatbot).await;
        assert_eq!(reply.text, "first\n\nsecond");
        assert_eq!(reply.grounding, Grounding::Blended);
    }

    #[tokio::test]
    async fn test_blend_caps_at_two_results_in_order() {
        let r = responder(ScriptedKnowledgeBase::returning(vec![
            doc("alpha", 0.4),
            doc("beta", 0.3),
            doc("gamma", 0.2),
        ]));
        let reply = r.answer("q", MessageType::Rag).await;
        assert_eq!(reply.text, "alpha\n\nbeta");
        assert_eq!(reply.sources.len(), 2);
    }

    #[tokio::test]
    async fn test_blend_skips_results_without_text() {
        let empty = SearchResult {
            score: Some(0.5),
            ..SearchResult::default()
        };
        let with_text: SearchResult = serde_json::from_value(json!({
            "metadata": { "content": "from metadata" },
            "score": 0.4
        }))
        .unwrap();
        let r = responder(ScriptedKnowledgeBase::returning(vec![
            empty,
            with_text,
            doc("third is never blended", 0.3),
        ]));
        let reply = r.answer("q", MessageType::Chatbot).await;
        assert_eq!(reply.text, "from metadata");
        assert_eq!(reply.grounding, Grounding::Blended);
    }

    #[tokio::test]
    async fn test_missing_score_never_takes_high_confidence_branch() {
        let unscored = SearchResult {
            text: Some("unscored".to_string()),
            ..SearchResult::default()
        };
        let r = responder(ScriptedKnowledgeBase::returning(vec![unscored, doc("next", 0.99)]));
        let reply = r.answer("q", MessageType::Chatbot).await;
        assert_eq!(reply.text, "unscored\n\nnext");
        assert_eq!(reply.grounding, Grounding::Blended);
    }

    #[tokio::test]
    async fn test_confident_top_without_text_falls_back_to_blend() {
        let textless = SearchResult {
            score: Some(0.95),
            ..SearchResult::default()
        };
        let r = responder(ScriptedKnowledgeBase::returning(vec![textless, doc("second", 0.5)]));
        let reply = r.answer("q", MessageType::Chatbot).await;
        assert_eq!(reply.text, "second");
        assert_eq!(reply.grounding, Grounding::Blended);
    }

    #[tokio::test]
    async fn test_no_results_uses_mode_fallback() {
        let r = responder(ScriptedKnowledgeBase::returning(vec![]));
        assert_eq!(r.respond("foo", MessageType::Rag).await, RAG_FALLBACK);
        assert_eq!(r.respond("foo", MessageType::Chatbot).await, CHATBOT_FALLBACK);
    }

    #[tokio::test]
    async fn test_search_error_uses_mode_fallback() {
        let r = responder(ScriptedKnowledgeBase::failing("connection refused"));
        let reply = r.answer("foo", MessageType::Rag).await;
        assert!(reply.text.contains("RAG-powered assistant"));
        assert_eq!(reply.grounding, Grounding::Fallback);
        assert!(reply.sources.is_empty());
        assert!(!reply.has_relevant_content());
    }

    #[tokio::test]
    async fn test_no_extractable_text_uses_fallback() {
        let r = responder(ScriptedKnowledgeBase::returning(vec![
            SearchResult {
                document: Some(String::new()),
                score: Some(0.9),
                ..SearchResult::default()
            },
            SearchResult::default(),
        ]));
        assert_eq!(r.respond("foo", MessageType::Chatbot).await, CHATBOT_FALLBACK);
    }

    #[test]
    fn test_select_reply_empty_is_none() {
        assert!(select_reply(&[]).is_none());
    }
}
