use anyhow::bail;
use jisho_core::{AutofillError, CollectionStore};
use jisho_types::Deck;

use crate::state::AppState;

/// Look a deck up by name
pub async fn find_deck<S>(store: &S, name: &str) -> anyhow::Result<Deck>
where
    S: CollectionStore + ?Sized,
{
    let decks = store.list_decks().await?;
    if decks.is_empty() {
        return Err(AutofillError::NoDecks.into());
    }

    match decks.into_iter().find(|d| d.name == name) {
        Some(deck) => Ok(deck),
        None => bail!("No deck named {name:?}"),
    }
}

pub async fn handle_decks(state: &AppState) -> anyhow::Result<()> {
    let decks = state.anki.list_decks().await?;
    if decks.is_empty() {
        return Err(AutofillError::NoDecks.into());
    }

    for deck in decks {
        println!("{}\t{}", deck.id, deck.name);
    }
    Ok(())
}
