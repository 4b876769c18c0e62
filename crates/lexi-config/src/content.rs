use std::env;

use serde::{Deserialize, Serialize};

fn default_fetch_timeout_ms() -> u64 {
    5000
}

/// Where dictionary pages are fetched from when they are not bundled
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ContentConfig {
    /// Remote base URL, pages are requested as `{base_url}/data/{html_ref}`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Local directory holding `{html_ref}` files, takes precedence over `base_url`
    #[serde(default)]
    pub content_dir: Option<String>,
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            content_dir: None,
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl ContentConfig {
    pub fn new() -> Self {
        let base_url = env::var("LEXI_CONTENT_URL").ok().filter(|v| !v.is_empty());
        let content_dir = env::var("LEXI_CONTENT_DIR").ok().filter(|v| !v.is_empty());
        let fetch_timeout_ms = env::var("LEXI_FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_fetch_timeout_ms);

        Self {
            base_url,
            content_dir,
            fetch_timeout_ms,
        }
    }
}
