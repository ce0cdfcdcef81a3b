use std::env;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
}

impl AnkiConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(url) = env::var("ANKI_CONNECT_URL") {
            self.url = url;
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}
