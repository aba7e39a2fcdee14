//! Service configuration types.
//!
//! `ServerConfig` represents `northbound.toml`. Every field has a default, so
//! an empty file (or no file at all) yields a runnable development setup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the chat service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpConfig,

    #[serde(default)]
    pub zerodb: ZeroDbConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

/// Listener and cookie settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Mark the session cookie `Secure` (enable in production).
    #[serde(default)]
    pub secure_cookies: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            secure_cookies: false,
        }
    }
}

/// Connection settings for the ZeroDB REST API (knowledge base + memory).
#[derive(Clone, Serialize, Deserialize)]
pub struct ZeroDbConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key or JWT. Never logged; see the manual `Debug` impl.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// Agent name recorded on every stored memory.
    #[serde(default = "default_agent_id")]
    pub agent_id: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.ainative.studio".to_string()
}

fn default_project_id() -> String {
    "northbound-studio-prod".to_string()
}

fn default_agent_id() -> String {
    "blaq-chatbot".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ZeroDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            project_id: default_project_id(),
            agent_id: default_agent_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for ZeroDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZeroDbConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("project_id", &self.project_id)
            .field("agent_id", &self.agent_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Chat behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Named corpus queried for similar passages.
    #[serde(default = "default_corpus")]
    pub corpus: String,

    /// Maximum number of stored turns returned by the history endpoint.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_corpus() -> String {
    "blaq_knowledge_base".to_string()
}

fn default_history_limit() -> usize {
    10
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            corpus: default_corpus(),
            history_limit: default_history_limit(),
        }
    }
}
