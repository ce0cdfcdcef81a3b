use std::env;
use std::thread;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word search endpoint, queried with `?keyword=`
    #[serde(default = "default_url")]
    pub url: String,
    /// Concurrent lookups during a batch, 0 means one per core
    #[serde(default)]
    pub workers: usize,
    /// NFKC-normalize terms before looking them up
    #[serde(default)]
    pub normalize: bool,
}

impl DictionaryConfig {
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }

        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    }

    pub(crate) fn apply_env(&mut self) {
        if let Ok(url) = env::var("JISHO_API_URL") {
            self.url = url;
        }

        if let Some(workers) = env::var("JISHO_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.workers = workers;
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            workers: 0,
            normalize: false,
        }
    }
}
