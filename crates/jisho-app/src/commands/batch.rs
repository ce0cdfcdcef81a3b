use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use jisho_config::Config;
use jisho_core::{
    BatchEngine, BatchReport, BatchRequest, CollectionStore, MemoryCollection, parse_terms,
    preprocessor,
};
use tokio::io::AsyncReadExt;

use super::decks::find_deck;
use crate::controller::BatchController;
use crate::state::AppState;

const DRY_RUN_DECK: i64 = 1;

pub async fn handle_batch(
    state: &AppState,
    deck: &str,
    tags: Option<String>,
    file: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let text = read_terms(file).await?;
    let terms = parse_terms(
        &text,
        preprocessor(state.config.dictionary.normalize).as_ref(),
    );
    tracing::info!("Read {} terms", terms.len());

    if dry_run {
        let store = Arc::new(dry_run_collection(&state.config, deck));
        run_batch(state, store, deck, terms, tags).await
    } else {
        let version = state
            .anki
            .check_connection()
            .await
            .context("AnkiConnect is not reachable, is Anki running?")?;
        tracing::debug!("AnkiConnect version {version}");
        run_batch(state, state.anki.clone(), deck, terms, tags).await
    }
}

async fn run_batch<S>(
    state: &AppState,
    store: Arc<S>,
    deck: &str,
    terms: Vec<String>,
    tags: Option<String>,
) -> anyhow::Result<()>
where
    S: CollectionStore + 'static,
{
    let deck = find_deck(store.as_ref(), deck).await?;
    let engine = Arc::new(BatchEngine::new(
        state.dictionary.clone(),
        store,
        state.config.clone(),
    ));

    let request = BatchRequest {
        terms,
        tags,
        deck: deck.id,
    };
    let outcome = BatchController::new().run(engine, request).await?;

    println!("{}", BatchReport::new(&outcome).render());
    Ok(())
}

async fn read_terms(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read terms from stdin")?;
            Ok(text)
        }
    }
}

/// Empty collection holding only the configured note type and the target deck
pub(crate) fn dry_run_collection(config: &Config, deck: &str) -> MemoryCollection {
    let mut fields: Vec<&str> = Vec::new();
    for name in [
        &config.fields.lookup,
        &config.fields.word,
        &config.fields.reading,
        &config.fields.meaning,
    ] {
        if !name.is_empty() && !fields.contains(&name.as_str()) {
            fields.push(name.as_str());
        }
    }

    let collection = MemoryCollection::new().with_deck(DRY_RUN_DECK, deck);
    if config.note.is_empty() {
        collection
    } else {
        collection.with_note_type(&config.note, fields)
    }
}
