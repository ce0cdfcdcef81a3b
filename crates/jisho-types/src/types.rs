use serde::{Deserialize, Serialize};

/// Marker the dictionary puts on senses usually written without kanji
pub const KANA_ALONE_MARKER: &str = "kana alone";

pub type NoteId = i64;
pub type DeckId = i64;

/// First search hit for a term, reduced to its first Japanese variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: Option<String>,
    pub reading: Option<String>,
    pub senses: Vec<Sense>,
}

impl DictionaryEntry {
    /// True when the first sense says the term is usually written in kana
    pub fn uses_kana_alone(&self) -> bool {
        self.senses.first().is_some_and(|sense| {
            sense
                .tags
                .iter()
                .any(|tag| tag.contains(KANA_ALONE_MARKER))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Values ready to be written into a note
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedFields {
    pub word: Option<String>,
    pub reading: Option<String>,
    pub meaning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
}

/// How a single batch term ended up in the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOutcome {
    /// New note holding the looked up data
    Added(NoteId),
    /// Tags merged into existing notes with the same word
    Merged(Vec<NoteId>),
    /// Lookup failed, placeholder note holding the raw term
    Missing(NoteId),
    /// The collection rejected the write, nothing was saved for the term
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum BatchEvent {
    Resolved {
        term: String,
        found: bool,
    },
    Committed {
        term: String,
        outcome: TermOutcome,
    },
    Finished {
        total: usize,
    },
}
