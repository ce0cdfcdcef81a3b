use std::collections::HashMap;

use anyhow::{Context, Result};
use jisho_types::{DeckId, NoteId};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        self.invoke("version", json!({})).await
    }

    /// Deck names mapped to their ids
    pub async fn deck_names_and_ids(&self) -> Result<HashMap<String, DeckId>> {
        self.invoke("deckNamesAndIds", json!({})).await
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>> {
        self.invoke("modelNames", json!({})).await
    }

    pub async fn model_field_names(&self, model: &str) -> Result<Vec<String>> {
        self.invoke("modelFieldNames", json!({ "modelName": model }))
            .await
    }

    /// Add a note to Anki
    pub async fn add_note(
        &self,
        deck: &str,
        model: &str,
        fields: &HashMap<&str, &str>,
        tags: &[String],
    ) -> Result<NoteId> {
        let params = json!({
            "note": {
                "deckName": deck,
                "modelName": model,
                "fields": fields,
                "tags": tags,
                // Duplicates are detected before adding
                "options": { "allowDuplicate": true }
            }
        });

        self.invoke("addNote", params).await
    }

    pub async fn find_notes(&self, query: &str) -> Result<Vec<NoteId>> {
        self.invoke("findNotes", json!({ "query": query })).await
    }

    pub async fn add_tags(&self, notes: &[NoteId], tags: &str) -> Result<()> {
        self.invoke_unit("addTags", json!({ "notes": notes, "tags": tags }))
            .await
    }

    pub async fn update_note_fields(&self, note: NoteId, fields: &HashMap<&str, &str>) -> Result<()> {
        self.invoke_unit(
            "updateNoteFields",
            json!({ "note": { "id": note, "fields": fields } }),
        )
        .await
    }

    pub async fn notes_info(&self, notes: &[NoteId]) -> Result<Vec<NoteInfo>> {
        self.invoke("notesInfo", json!({ "notes": notes })).await
    }

    /// Invoke an action whose result is `null` on success
    async fn invoke_unit(&self, action: &str, params: serde_json::Value) -> Result<()> {
        let response: AnkiResponse<serde_json::Value> = self.send(action, params).await?;
        response.into_unit()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.send(action, params).await?.into_result()
    }

    async fn send<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        tracing::debug!("AnkiConnect {action}");
        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .with_context(|| format!("Failed to parse AnkiConnect {action} response"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub note_id: NoteId,
    pub model_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub fields: HashMap<String, FieldInfo>,
}

#[derive(Debug, Deserialize)]
pub struct FieldInfo {
    pub value: String,
    pub order: usize,
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }

    fn into_unit(self) -> Result<()> {
        match self.error {
            Some(error) => anyhow::bail!("AnkiConnect error: {}", error),
            None => Ok(()),
        }
    }
}
