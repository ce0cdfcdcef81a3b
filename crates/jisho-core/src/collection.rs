use async_trait::async_trait;
use jisho_types::{Deck, NoteId};

use crate::error::CollectionError;
use crate::record::Record;

/// Note storage the fill and batch operations write into
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Field names of a note type, in note type order
    async fn note_fields(&self, note_type: &str) -> Result<Vec<String>, CollectionError>;

    /// All decks, sorted by name
    async fn list_decks(&self) -> Result<Vec<Deck>, CollectionError>;

    /// Add a transient record to a deck
    async fn create_note(&self, deck: &Deck, record: &Record) -> Result<NoteId, CollectionError>;

    /// Notes of `note_type` whose `field` equals `value`, ignoring case as Anki's
    /// field search does
    async fn find_notes(
        &self,
        note_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<NoteId>, CollectionError>;

    /// Add tags to an existing note and save it
    async fn merge_tags(&self, note: NoteId, tags: &[String]) -> Result<(), CollectionError>;

    /// Save the field values of a persisted record
    async fn update_note(&self, record: &Record) -> Result<(), CollectionError>;

    async fn load_note(&self, note: NoteId) -> Result<Record, CollectionError>;
}
