//! Configuration loader for the chat service.
//!
//! Reads `northbound.toml` and deserializes it into [`ServerConfig`]. Falls
//! back to defaults when the file is missing or malformed, then applies
//! environment overrides on top.

use std::path::Path;

use northbound_types::config::ServerConfig;
use northbound_types::error::ConfigError;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "northbound.toml";

pub const ENV_API_URL: &str = "AINATIVE_API_URL";
pub const ENV_API_KEY: &str = "AINATIVE_API_KEY";
pub const ENV_PROJECT_ID: &str = "ZERODB_PROJECT_ID";
pub const ENV_CORPUS: &str = "NORTHBOUND_CORPUS";
pub const ENV_SECURE_COOKIES: &str = "NORTHBOUND_SECURE_COOKIES";

/// Load configuration from a TOML file.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config(path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are ignored. A `NORTHBOUND_SECURE_COOKIES` value that is not a
/// boolean is rejected rather than silently ignored.
pub fn apply_env_overrides<F>(
    mut config: ServerConfig,
    lookup: F,
) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(url) = get(ENV_API_URL) {
        config.zerodb.base_url = url;
    }
    if let Some(key) = get(ENV_API_KEY) {
        config.zerodb.api_key = Some(key);
    }
    if let Some(project) = get(ENV_PROJECT_ID) {
        config.zerodb.project_id = project;
    }
    if let Some(corpus) = get(ENV_CORPUS) {
        config.chat.corpus = corpus;
    }
    if let Some(raw) = get(ENV_SECURE_COOKIES) {
        config.server.secure_cookies =
            parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SECURE_COOKIES.to_string(),
                message: format!("expected a boolean, got '{raw}'"),
            })?;
    }

    Ok(config)
}

/// Load the file at `path` and apply overrides from the process environment.
pub async fn resolve_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let config = load_config(path).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chat.corpus, "blaq_knowledge_base");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
[server]
port = 8088

[zerodb]
base_url = "http://localhost:9999"
timeout_secs = 5
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.zerodb.base_url, "http://localhost:9999");
        assert_eq!(config.zerodb.timeout_secs, 5);
        assert_eq!(config.chat.history_limit, 10);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let config = apply_env_overrides(
            ServerConfig::default(),
            env(&[
                (ENV_API_URL, "http://zerodb.internal"),
                (ENV_API_KEY, "eyJhbGciOi"),
                (ENV_PROJECT_ID, "staging"),
                (ENV_CORPUS, "staging_kb"),
                (ENV_SECURE_COOKIES, "true"),
            ]),
        )
        .unwrap();

        assert_eq!(config.zerodb.base_url, "http://zerodb.internal");
        assert_eq!(config.zerodb.api_key.as_deref(), Some("eyJhbGciOi"));
        assert_eq!(config.zerodb.project_id, "staging");
        assert_eq!(config.chat.corpus, "staging_kb");
        assert!(config.server.secure_cookies);
    }

    #[test]
    fn env_overrides_ignore_empty_values() {
        let config =
            apply_env_overrides(ServerConfig::default(), env(&[(ENV_API_URL, "")])).unwrap();
        assert_eq!(config.zerodb.base_url, "https://api.ainative.studio");
    }

    #[test]
    fn env_overrides_reject_bad_boolean() {
        let err = apply_env_overrides(
            ServerConfig::default(),
            env(&[(ENV_SECURE_COOKIES, "sometimes")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains(ENV_SECURE_COOKIES));
    }
}
