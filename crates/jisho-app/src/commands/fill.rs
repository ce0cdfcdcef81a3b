use anyhow::Context;
use jisho_core::{CollectionStore, fill_record};
use jisho_types::NoteId;

use crate::state::AppState;

pub async fn handle_fill(state: &AppState, note_id: NoteId) -> anyhow::Result<()> {
    let mut record = state
        .anki
        .load_note(note_id)
        .await
        .with_context(|| format!("Failed to load note {note_id}"))?;

    let outcome = fill_record(
        state.dictionary.as_ref(),
        state.anki.as_ref(),
        &state.config,
        Some(&mut record),
    )
    .await?;

    match outcome.word {
        Some(word) => println!("{note_id}: {word} ({})", outcome.written.join(", ")),
        None => println!("{note_id}: {}", outcome.written.join(", ")),
    }
    Ok(())
}
