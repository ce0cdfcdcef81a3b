use std::collections::BTreeSet;

use jisho_types::NoteId;

/// A note as seen by fill and batch operations.
///
/// Only fields defined by the note type can be set. A record without an id is
/// transient and becomes persisted once the collection assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: Option<NoteId>,
    note_type: String,
    fields: Vec<(String, String)>,
    tags: BTreeSet<String>,
}

impl Record {
    /// Create an empty transient record
    pub fn new<I, S>(note_type: &str, field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            note_type: note_type.to_string(),
            fields: field_names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
            tags: BTreeSet::new(),
        }
    }

    /// Rebuild a record already stored in a collection
    pub fn persisted<I>(id: NoteId, note_type: &str, fields: Vec<(String, String)>, tags: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut record = Self {
            id: Some(id),
            note_type: note_type.to_string(),
            fields,
            tags: BTreeSet::new(),
        };
        for tag in tags {
            record.add_tag(&tag);
        }
        record
    }

    pub fn id(&self) -> Option<NoteId> {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn note_type(&self) -> &str {
        &self.note_type
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn try_get_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns false when the note type has no such field
    pub fn try_set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    /// Add a tag, empty tags are ignored
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }

        self.tags.insert(tag.to_string());
        true
    }

    /// Add space separated tags
    pub fn add_tags_from_str(&mut self, text: &str) {
        for tag in split_tags(text) {
            self.add_tag(tag);
        }
    }
}

pub fn split_tags(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
