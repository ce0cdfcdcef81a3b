#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use jisho_config::Config;
use jisho_core::MemoryCollection;
use jisho_dictionary::{Dictionary, LookupError};
use jisho_types::{DictionaryEntry, Sense};

pub const NOTE_TYPE: &str = "Vocab";
pub const DECK: i64 = 1;

/// Canned dictionary: known terms resolve, `unreachable` terms always fail transiently,
/// anything else has no results
#[derive(Default)]
pub struct StubDictionary {
    entries: HashMap<String, DictionaryEntry>,
    unreachable: HashSet<String>,
    calls: Mutex<HashMap<String, u32>>,
}

impl StubDictionary {
    pub fn new() -> Self {
        Self::default()
            .with("猫", Some("猫"), "ねこ", &[])
            .with("ねこ", Some("猫"), "ねこ", &[])
            .with("犬", Some("犬"), "いぬ", &[])
            .with("流石", Some("流石"), "さすが", &["Usually written using kana alone"])
    }

    pub fn with(mut self, term: &str, word: Option<&str>, reading: &str, tags: &[&str]) -> Self {
        self.entries.insert(
            term.to_string(),
            DictionaryEntry {
                word: word.map(str::to_string),
                reading: Some(reading.to_string()),
                senses: vec![Sense {
                    parts_of_speech: vec!["Noun".to_string()],
                    english_definitions: vec![format!("meaning of {term}")],
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                }],
            },
        );
        self
    }

    pub fn unreachable_for(mut self, term: &str) -> Self {
        self.unreachable.insert(term.to_string());
        self
    }

    pub fn calls(&self, term: &str) -> u32 {
        self.calls.lock().unwrap().get(term).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl Dictionary for StubDictionary {
    async fn resolve(&self, term: &str) -> Result<DictionaryEntry, LookupError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(term.to_string())
            .or_default() += 1;

        if self.unreachable.contains(term) {
            return Err(LookupError::Unreachable("connection refused".into()));
        }

        self.entries
            .get(term)
            .cloned()
            .ok_or_else(|| LookupError::NoResults(term.to_string()))
    }
}

pub fn config() -> Config {
    let mut config = Config::default();
    config.note = NOTE_TYPE.to_string();
    config.retry.times = 3;
    config.retry.delay_seconds = 0.0;
    config.dictionary.workers = 4;
    config.fields.lookup = "Word".to_string();
    config.fields.word = "Word".to_string();
    config.fields.reading = "Reading".to_string();
    config.fields.meaning = "Meaning".to_string();
    config.tags.added = "jisho".to_string();
    config.tags.changed = "jisho-changed".to_string();
    config.tags.duplicate = "jisho-duplicate".to_string();
    config.tags.missing = "jisho-missing".to_string();
    config
}

pub fn collection() -> MemoryCollection {
    MemoryCollection::new()
        .with_note_type(NOTE_TYPE, ["Word", "Reading", "Meaning"])
        .with_deck(DECK, "Japanese")
        .with_deck(2, "Archive")
}

pub fn terms(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}
