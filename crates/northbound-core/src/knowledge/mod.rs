//! Knowledge-base port.
//!
//! `KnowledgeBase` is the similarity-search interface the retrieval responder
//! queries; `BoxKnowledgeBase` erases the concrete backend for runtime wiring.

pub mod base;
pub mod box_base;

pub use base::KnowledgeBase;
pub use box_base::BoxKnowledgeBase;
