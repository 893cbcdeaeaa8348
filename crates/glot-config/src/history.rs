use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_max_entries() -> usize {
    100
}

fn default_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".glot_history.json")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
    /// Oldest entries are dropped once the log grows past this
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("GLOT_HISTORY_FILE") {
            config.file_path = PathBuf::from(path);
        }
        if let Some(max) = env::var("GLOT_MAX_HISTORY").ok().and_then(|v| v.parse().ok()) {
            config.max_entries = max;
        }

        config
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            max_entries: default_max_entries(),
        }
    }
}
