//! Static fallback replies.
//!
//! Used whenever the knowledge base is unreachable or has nothing usable to
//! say. Selecting them never touches an external service.

use northbound_types::chat::MessageType;

/// General capability blurb for the default chat widget.
pub const CHATBOT_FALLBACK: &str = "I'm Cody, Northbound Studio's AI assistant! I'm here to help answer your questions about our AI development services, RAG chatbot solutions, and web development offerings.

Feel free to ask me about:
• Our services and capabilities
• Project pricing and timelines
• How RAG technology works
• Our multi-location team (LA, SF, Atlanta)
• Getting started with a project

What can I help you with today?";

/// Capability blurb for explicit RAG mode.
pub const RAG_FALLBACK: &str = "I'm Cody, Northbound Studio's RAG-powered assistant. I answer from our own knowledge base, and I couldn't find a passage that matches your question closely enough to quote.

Here are some topics I know about:

**Services & Solutions**
• AI chatbots and RAG systems
• Web development and AI integration
• Conversational media platforms

**Company Information**
• Our locations (LA HQ, SF Tech Hub, Atlanta Office)
• Team and expertise

**Project Details**
• Pricing and timelines
• How to get started

What would you like to know more about?";

/// The fallback reply for a message type.
pub fn fallback_reply(mode: MessageType) -> &'static str {
    match mode {
        MessageType::Rag => RAG_FALLBACK,
        MessageType::Chatbot => CHATBOT_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_selected_by_mode() {
        assert_eq!(fallback_reply(MessageType::Rag), RAG_FALLBACK);
        assert_eq!(fallback_reply(MessageType::Chatbot), CHATBOT_FALLBACK);
        assert_ne!(RAG_FALLBACK, CHATBOT_FALLBACK);
    }

    #[test]
    fn test_rag_fallback_mentions_rag_assistant() {
        assert!(RAG_FALLBACK.contains("RAG-powered assistant"));
        assert!(!CHATBOT_FALLBACK.contains("RAG-powered assistant"));
    }
}
