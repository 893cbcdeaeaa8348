use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_max_chars() -> usize {
    4500
}

fn default_max_lines() -> usize {
    50
}

fn default_chunk_margin() -> usize {
    100
}

fn default_translate_timeout_secs() -> u64 {
    30
}

fn default_detect_timeout_secs() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The endpoint rejects requests around 5000 characters
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    /// Subtracted from max_chars when splitting oversized text
    #[serde(default = "default_chunk_margin")]
    pub chunk_margin: usize,
    #[serde(default = "default_translate_timeout_secs")]
    pub translate_timeout_secs: u64,
    #[serde(default = "default_detect_timeout_secs")]
    pub detect_timeout_secs: u64,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("GLOT_BASE_URL") {
            config.base_url = url;
        }
        if let Some(max_chars) = env::var("GLOT_MAX_CHARS").ok().and_then(|v| v.parse().ok()) {
            config.max_chars = max_chars;
        }
        if let Some(max_lines) = env::var("GLOT_MAX_LINES").ok().and_then(|v| v.parse().ok()) {
            config.max_lines = max_lines;
        }

        config
    }

    pub fn translate_timeout(&self) -> Duration {
        Duration::from_secs(self.translate_timeout_secs)
    }

    pub fn detect_timeout(&self) -> Duration {
        Duration::from_secs(self.detect_timeout_secs)
    }

    /// Per-chunk character budget used when splitting oversized text
    pub fn chunk_size(&self) -> usize {
        self.max_chars.saturating_sub(self.chunk_margin)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_chars: default_max_chars(),
            max_lines: default_max_lines(),
            chunk_margin: default_chunk_margin(),
            translate_timeout_secs: default_translate_timeout_secs(),
            detect_timeout_secs: default_detect_timeout_secs(),
        }
    }
}
