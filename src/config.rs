use anyhow::{ensure, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // REST API
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Persisted browser state
    pub language_store_path: String,

    // Dashboard
    pub recent_transactions_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();
        ensure!(
            api_base_url.starts_with("http://") || api_base_url.starts_with("https://"),
            "API_BASE_URL must be an http(s) URL, got '{}'",
            api_base_url
        );

        Ok(Self {
            api_base_url,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            language_store_path: std::env::var("LANGUAGE_STORE_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            recent_transactions_limit: std::env::var("RECENT_TRANSACTIONS_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }

    /// Configuration pointing at a specific API, with every other value at
    /// its default.
    pub fn for_api(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: 10,
            language_store_path: "data/preferences.json".to_string(),
            recent_transactions_limit: 5,
        }
    }
}
