//! `northbound ask`: one retrieval round-trip from the terminal.

use northbound_core::chat::Reply;
use northbound_types::chat::MessageType;

use crate::state::AppState;

/// How `ask` prints its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Indented reply plus a grounding footer.
    Styled,
    /// The reply text only, for `--quiet`.
    Plain,
    Json,
}

impl Output {
    /// `--json` wins over `--quiet`.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Output::Json,
            (false, true) => Output::Plain,
            (false, false) => Output::Styled,
        }
    }
}

/// Answer `message` with the configured knowledge base and print the reply.
pub async fn ask(
    state: &AppState,
    message: &str,
    mode: MessageType,
    output: Output,
) -> anyhow::Result<()> {
    let reply = state.chat_service.responder().answer(message, mode).await;

    match output {
        Output::Json => {
            println!("{}", serde_json::to_string_pretty(&reply_json(&reply, mode))?);
            return Ok(());
        }
        Output::Plain => {
            println!("{}", reply.text);
            return Ok(());
        }
        Output::Styled => {}
    }

    println!();
    println!("  {}", reply.text.replace('\n', "\n  "));
    println!();

    let grounding = if reply.has_relevant_content() {
        console::style(reply.grounding.as_str()).green()
    } else {
        console::style(reply.grounding.as_str()).yellow()
    };
    println!(
        "  {} {} · {} source(s)",
        console::style("grounding:").dim(),
        grounding,
        reply.sources.len()
    );
    for source in &reply.sources {
        if let Some(score) = source.score {
            println!("    {} {:.3}", console::style("score").dim(), score);
        }
    }
    println!();

    Ok(())
}

fn reply_json(reply: &Reply, mode: MessageType) -> serde_json::Value {
    serde_json::json!({
        "response": reply.text,
        "grounding": reply.grounding.as_str(),
        "metadata": {
            "hasRelevantContent": reply.has_relevant_content(),
            "type": mode,
            "sourcesCount": reply.sources.len(),
        },
        "sources": reply.sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use northbound_core::chat::Grounding;
    use northbound_types::search::SearchResult;

    #[test]
    fn output_mode_from_flags() {
        assert_eq!(Output::from_flags(false, false), Output::Styled);
        assert_eq!(Output::from_flags(false, true), Output::Plain);
        assert_eq!(Output::from_flags(true, false), Output::Json);
        assert_eq!(Output::from_flags(true, true), Output::Json);
    }

    #[test]
    fn json_output_mirrors_http_metadata() {
        let reply = Reply {
            text: "We build RAG chatbots.".to_string(),
            grounding: Grounding::HighConfidence,
            sources: vec![SearchResult {
                document: Some("We build RAG chatbots.".to_string()),
                score: Some(0.91),
                ..Default::default()
            }],
        };

        let value = reply_json(&reply, MessageType::Rag);
        assert_eq!(value["response"], "We build RAG chatbots.");
        assert_eq!(value["grounding"], "high_confidence");
        assert_eq!(value["metadata"]["hasRelevantContent"], true);
        assert_eq!(value["metadata"]["type"], "rag");
        assert_eq!(value["metadata"]["sourcesCount"], 1);
    }
}
