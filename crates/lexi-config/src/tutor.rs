use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_fast_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_smart_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TutorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Never written to profile files; comes from `GEMINI_API_KEY`
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Used for details, quizzes and flashcard curation
    #[serde(default = "default_fast_model")]
    pub fast_model: String,
    /// Used for chat
    #[serde(default = "default_smart_model")]
    pub smart_model: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            api_url: default_api_url(),
            fast_model: default_fast_model(),
            smart_model: default_smart_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TutorConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| default_api_url());
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            enabled: !api_key.is_empty(),
            api_key,
            api_url,
            timeout_seconds,
            ..Self::default()
        }
    }

    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}
