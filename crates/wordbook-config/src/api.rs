use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://wordbook.cjpg.app";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("Rust-Wordbook-Client/{}", env!("CARGO_PKG_VERSION"))
}

/// Where the wordbook API lives and how we identify ourselves to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("WORDBOOK_BASE_URL").unwrap_or_else(|_| default_base_url());
        let user_agent = env::var("WORDBOOK_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            base_url,
            user_agent,
        }
    }

    /// Join the base url with an api path, e.g. `/definitions?id=5`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(
            config.endpoint("/suggestions?query=a"),
            "http://localhost:8080/suggestions?query=a"
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"base_url":"http://example.test"}"#).unwrap();
        assert_eq!(config.base_url, "http://example.test");
        assert!(config.user_agent.starts_with("Rust-Wordbook-Client/"));
    }
}
