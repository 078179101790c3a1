use std::env;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;

pub mod api;

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("WORDBOOK_LOG").unwrap_or_else(|_| default_log_filter());

        Config {
            api: ApiConfig::new(),
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}
