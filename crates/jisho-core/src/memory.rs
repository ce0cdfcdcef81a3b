use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use jisho_types::{Deck, DeckId, NoteId};
use tokio::sync::Mutex;

use crate::collection::CollectionStore;
use crate::error::CollectionError;
use crate::record::Record;

/// In-process collection, used for dry runs and tests
#[derive(Default)]
pub struct MemoryCollection {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    note_types: HashMap<String, Vec<String>>,
    decks: Vec<Deck>,
    notes: BTreeMap<NoteId, StoredNote>,
    next_id: NoteId,
}

#[derive(Clone)]
struct StoredNote {
    deck: DeckId,
    record: Record,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note_type<I, S>(mut self, name: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        self.inner
            .get_mut()
            .note_types
            .insert(name.to_string(), fields);
        self
    }

    pub fn with_deck(mut self, id: DeckId, name: &str) -> Self {
        self.inner.get_mut().decks.push(Deck {
            id,
            name: name.to_string(),
        });
        self
    }

    /// Stored notes in creation order
    pub async fn notes(&self) -> Vec<Record> {
        let inner = self.inner.lock().await;
        inner.notes.values().map(|n| n.record.clone()).collect()
    }

    pub async fn notes_in_deck(&self, deck: DeckId) -> Vec<Record> {
        let inner = self.inner.lock().await;
        inner
            .notes
            .values()
            .filter(|n| n.deck == deck)
            .map(|n| n.record.clone())
            .collect()
    }

    pub async fn note(&self, id: NoteId) -> Option<Record> {
        let inner = self.inner.lock().await;
        inner.notes.get(&id).map(|n| n.record.clone())
    }
}

#[async_trait]
impl CollectionStore for MemoryCollection {
    async fn note_fields(&self, note_type: &str) -> Result<Vec<String>, CollectionError> {
        let inner = self.inner.lock().await;
        inner
            .note_types
            .get(note_type)
            .cloned()
            .ok_or_else(|| CollectionError::NoteTypeNotFound(note_type.to_string()))
    }

    async fn list_decks(&self) -> Result<Vec<Deck>, CollectionError> {
        let inner = self.inner.lock().await;
        let mut decks = inner.decks.clone();
        decks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(decks)
    }

    async fn create_note(&self, deck: &Deck, record: &Record) -> Result<NoteId, CollectionError> {
        let mut inner = self.inner.lock().await;

        if !inner.decks.iter().any(|d| d.id == deck.id) {
            return Err(CollectionError::DeckNotFound(deck.id));
        }
        if !inner.note_types.contains_key(record.note_type()) {
            return Err(CollectionError::NoteTypeNotFound(
                record.note_type().to_string(),
            ));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let fields = record
            .fields()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        let stored = Record::persisted(id, record.note_type(), fields, record.tag_list());

        inner.notes.insert(
            id,
            StoredNote {
                deck: deck.id,
                record: stored,
            },
        );
        Ok(id)
    }

    async fn find_notes(
        &self,
        note_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<NoteId>, CollectionError> {
        let inner = self.inner.lock().await;
        let value = value.to_lowercase();
        Ok(inner
            .notes
            .iter()
            .filter(|(_, n)| {
                n.record.note_type() == note_type
                    && n
                        .record
                        .try_get_field(field)
                        .is_some_and(|v| v.to_lowercase() == value)
            })
            .map(|(id, _)| *id)
            .collect())
    }

    async fn merge_tags(&self, note: NoteId, tags: &[String]) -> Result<(), CollectionError> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .notes
            .get_mut(&note)
            .ok_or(CollectionError::NoteNotFound(note))?;

        for tag in tags {
            stored.record.add_tag(tag);
        }
        Ok(())
    }

    async fn update_note(&self, record: &Record) -> Result<(), CollectionError> {
        let id = record
            .id()
            .ok_or_else(|| CollectionError::Backend("cannot update a note without an id".into()))?;

        let mut inner = self.inner.lock().await;
        let stored = inner
            .notes
            .get_mut(&id)
            .ok_or(CollectionError::NoteNotFound(id))?;

        for (name, value) in record.fields() {
            stored.record.try_set_field(name, value);
        }
        Ok(())
    }

    async fn load_note(&self, note: NoteId) -> Result<Record, CollectionError> {
        self.note(note)
            .await
            .ok_or(CollectionError::NoteNotFound(note))
    }
}
