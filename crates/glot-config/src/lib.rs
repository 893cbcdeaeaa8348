use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::translator::TranslatorConfig;

pub mod history;
pub mod translator;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub history: HistoryConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::new(),
            history: HistoryConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
