use jisho_types::{DeckId, NoteId};

/// Failures reported by a collection backend
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Note type not found: {0}")]
    NoteTypeNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("Collection error: {0}")]
    Backend(String),
}

/// User-facing failures of fill and batch operations.
///
/// Everything except `LookupFailed` and `Collection` is raised before any
/// lookup or collection write happens.
#[derive(Debug, thiserror::Error)]
pub enum AutofillError {
    #[error("No note type configured.")]
    NoNoteType,

    #[error("No note type with name {0}.")]
    UnknownNoteType(String),

    #[error("No word field configured.")]
    NoWordField,

    #[error("No lookup field configured.")]
    NoLookupField,

    #[error("{field} not in note type {note_type}.")]
    FieldNotInNoteType { field: String, note_type: String },

    #[error("No decks!")]
    NoDecks,

    #[error("No deck with id {0}.")]
    UnknownDeck(DeckId),

    #[error("No terms to create.")]
    NoTerms,

    #[error("No tags entered.")]
    NoTags,

    #[error("Not editing a note.")]
    NoActiveNote,

    #[error("{0} not in note.")]
    LookupFieldNotInNote(String),

    #[error("{0} is empty.")]
    LookupFieldEmpty(String),

    #[error("Lookup failed for {0}.")]
    LookupFailed(String),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}
