use std::collections::HashMap;

use async_trait::async_trait;
use jisho_core::{CollectionError, CollectionStore, Record};
use jisho_types::{Deck, NoteId};

use crate::client::AnkiConnectClient;
use crate::query::field_query;

fn backend(e: anyhow::Error) -> CollectionError {
    CollectionError::Backend(format!("{e:#}"))
}

fn field_map(record: &Record) -> HashMap<&str, &str> {
    record.fields().collect()
}

#[async_trait]
impl CollectionStore for AnkiConnectClient {
    async fn note_fields(&self, note_type: &str) -> Result<Vec<String>, CollectionError> {
        let models = self.model_names().await.map_err(backend)?;
        if !models.iter().any(|m| m == note_type) {
            return Err(CollectionError::NoteTypeNotFound(note_type.to_string()));
        }

        self.model_field_names(note_type).await.map_err(backend)
    }

    async fn list_decks(&self) -> Result<Vec<Deck>, CollectionError> {
        let mut decks: Vec<Deck> = self
            .deck_names_and_ids()
            .await
            .map_err(backend)?
            .into_iter()
            .map(|(name, id)| Deck { id, name })
            .collect();
        decks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(decks)
    }

    async fn create_note(&self, deck: &Deck, record: &Record) -> Result<NoteId, CollectionError> {
        let id = self
            .add_note(
                &deck.name,
                record.note_type(),
                &field_map(record),
                &record.tag_list(),
            )
            .await
            .map_err(backend)?;

        tracing::debug!("Added note {id} to {:?}", deck.name);
        Ok(id)
    }

    async fn find_notes(
        &self,
        note_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<NoteId>, CollectionError> {
        AnkiConnectClient::find_notes(self, &field_query(note_type, field, value))
            .await
            .map_err(backend)
    }

    async fn merge_tags(&self, note: NoteId, tags: &[String]) -> Result<(), CollectionError> {
        if tags.is_empty() {
            return Ok(());
        }

        self.add_tags(&[note], &tags.join(" "))
            .await
            .map_err(backend)
    }

    async fn update_note(&self, record: &Record) -> Result<(), CollectionError> {
        let id = record
            .id()
            .ok_or_else(|| CollectionError::Backend("cannot update a note without an id".into()))?;

        self.update_note_fields(id, &field_map(record))
            .await
            .map_err(backend)
    }

    async fn load_note(&self, note: NoteId) -> Result<Record, CollectionError> {
        let info = self
            .notes_info(&[note])
            .await
            .map_err(backend)?
            .into_iter()
            .find(|info| info.note_id == note)
            .ok_or(CollectionError::NoteNotFound(note))?;

        let mut fields: Vec<(usize, String, String)> = info
            .fields
            .into_iter()
            .map(|(name, field)| (field.order, name, field.value))
            .collect();
        fields.sort_by_key(|(order, _, _)| *order);

        Ok(Record::persisted(
            info.note_id,
            &info.model_name,
            fields
                .into_iter()
                .map(|(_, name, value)| (name, value))
                .collect(),
            info.tags,
        ))
    }
}
