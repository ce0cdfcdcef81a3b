use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::fields::FieldsConfig;
use self::retry::RetryConfig;
use self::tags::TagsConfig;

pub mod anki;
pub mod dictionary;
pub mod fields;
pub mod retry;
pub mod tags;

fn default_hotkey() -> String {
    "Ctrl+Shift+J".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shortcut for filling the open note, kept for front-ends that bind keys
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    /// Note type used for batch creation
    pub note: String,
    pub retry: RetryConfig,
    pub fields: FieldsConfig,
    pub tags: TagsConfig,
    pub anki: AnkiConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Load config from a JSON file, falling back to defaults when it does not exist.
    /// Environment overrides are applied on top.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_json(&data)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            tracing::warn!("{} not found, using default config", path.display());
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    fn apply_env(&mut self) {
        self.anki.apply_env();
        self.dictionary.apply_env();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: default_hotkey(),
            note: String::new(),
            retry: RetryConfig::default(),
            fields: FieldsConfig::default(),
            tags: TagsConfig::default(),
            anki: AnkiConfig::default(),
            dictionary: DictionaryConfig::default(),
        }
    }
}
