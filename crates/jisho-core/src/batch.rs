use std::sync::Arc;

use jisho_config::Config;
use jisho_dictionary::{Dictionary, resolve_with_retry};
use jisho_types::{BatchEvent, Deck, DeckId, DictionaryEntry, TermOutcome};
use kanal::AsyncSender;
use tokio::sync::Semaphore;
use tokio::task::{JoinHandle, JoinSet};
use tracing::Instrument;
use uuid::Uuid;

use crate::collection::CollectionStore;
use crate::error::{AutofillError, CollectionError};
use crate::mapper::{map_fields, try_write, write_fields};
use crate::record::{Record, split_tags};

/// Terms to create notes for
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub terms: Vec<String>,
    /// Space separated tags, `None` when the tag prompt was cancelled
    pub tags: Option<String>,
    pub deck: DeckId,
}

/// What a batch did, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Words of newly created notes
    pub added: Vec<String>,
    /// Terms the dictionary could not resolve
    pub missing: Vec<String>,
    /// `term → word` where the dictionary form differs from the input
    pub changed: Vec<String>,
    /// Words that already had notes
    pub duplicates: Vec<String>,
    /// Terms the collection refused to save
    pub failed: Vec<String>,
}

/// Everything checked before the batch touches the network or the collection
struct Prepared {
    deck: Deck,
    field_names: Vec<String>,
    terms: Vec<String>,
    tags: String,
}

/// Creates notes from a list of terms, merging into existing notes with the same word.
///
/// Lookups run concurrently on a bounded pool. Collection writes happen afterwards,
/// one term at a time in input order, so two terms resolving to the same word can
/// never both create a note.
pub struct BatchEngine<D, S> {
    dictionary: Arc<D>,
    store: Arc<S>,
    config: Arc<Config>,
}

impl<D, S> BatchEngine<D, S>
where
    D: Dictionary + 'static,
    S: CollectionStore + 'static,
{
    pub fn new(dictionary: Arc<D>, store: Arc<S>, config: Arc<Config>) -> Self {
        Self {
            dictionary,
            store,
            config,
        }
    }

    /// Run the batch on its own task
    pub fn submit(
        self: &Arc<Self>,
        request: BatchRequest,
        progress: Option<AsyncSender<BatchEvent>>,
    ) -> JoinHandle<Result<BatchOutcome, AutofillError>> {
        let engine = Arc::clone(self);
        tokio::spawn(async move { engine.run(request, progress).await })
    }

    pub async fn run(
        &self,
        request: BatchRequest,
        progress: Option<AsyncSender<BatchEvent>>,
    ) -> Result<BatchOutcome, AutofillError> {
        let span = tracing::info_span!("batch", run_id = %Uuid::new_v4());
        self.run_inner(request, progress).instrument(span).await
    }

    async fn run_inner(
        &self,
        request: BatchRequest,
        progress: Option<AsyncSender<BatchEvent>>,
    ) -> Result<BatchOutcome, AutofillError> {
        let prepared = self.prepare(request).await?;
        let total = prepared.terms.len();
        tracing::info!(
            "Creating notes for {total} terms in deck {:?}",
            prepared.deck.name
        );

        let resolved = self.resolve_all(&prepared.terms, &progress).await;

        let mut outcome = BatchOutcome::default();
        for (term, entry) in prepared.terms.iter().zip(resolved) {
            let term_outcome = match self.commit_term(&prepared, term, entry, &mut outcome).await {
                Ok(term_outcome) => term_outcome,
                Err(e) => {
                    tracing::error!("Could not save {term:?}: {e}");
                    outcome.failed.push(term.clone());
                    TermOutcome::Failed(e.to_string())
                }
            };
            tracing::debug!("{term}: {term_outcome:?}");
            notify(
                &progress,
                BatchEvent::Committed {
                    term: term.clone(),
                    outcome: term_outcome,
                },
            )
            .await;
        }

        tracing::info!(
            "Batch finished: {} added, {} duplicates, {} missing, {} changed, {} failed",
            outcome.added.len(),
            outcome.duplicates.len(),
            outcome.missing.len(),
            outcome.changed.len(),
            outcome.failed.len()
        );
        notify(&progress, BatchEvent::Finished { total }).await;

        Ok(outcome)
    }

    async fn prepare(&self, request: BatchRequest) -> Result<Prepared, AutofillError> {
        let config = &self.config;

        if config.note.is_empty() {
            return Err(AutofillError::NoNoteType);
        }
        if config.fields.word.is_empty() {
            return Err(AutofillError::NoWordField);
        }

        let terms: Vec<String> = request
            .terms
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return Err(AutofillError::NoTerms);
        }

        let tags = match request.tags {
            Some(tags) if split_tags(&tags).next().is_some() => tags,
            _ => return Err(AutofillError::NoTags),
        };

        let field_names = match self.store.note_fields(&config.note).await {
            Ok(names) => names,
            Err(CollectionError::NoteTypeNotFound(_)) => {
                return Err(AutofillError::UnknownNoteType(config.note.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        if !field_names.contains(&config.fields.word) {
            return Err(AutofillError::FieldNotInNoteType {
                field: config.fields.word.clone(),
                note_type: config.note.clone(),
            });
        }

        let decks = self.store.list_decks().await?;
        if decks.is_empty() {
            return Err(AutofillError::NoDecks);
        }
        let deck = decks
            .into_iter()
            .find(|d| d.id == request.deck)
            .ok_or(AutofillError::UnknownDeck(request.deck))?;

        Ok(Prepared {
            deck,
            field_names,
            terms,
            tags,
        })
    }

    /// Look up every term, results indexed like `terms`
    async fn resolve_all(
        &self,
        terms: &[String],
        progress: &Option<AsyncSender<BatchEvent>>,
    ) -> Vec<Option<DictionaryEntry>> {
        let workers = self.config.dictionary.worker_count();
        let semaphore = Arc::new(Semaphore::new(workers));
        let attempts = self.config.retry.times;
        let delay = self.config.retry.delay();
        tracing::debug!("Resolving {} terms with {workers} workers", terms.len());

        let mut tasks = JoinSet::new();
        for (index, term) in terms.iter().enumerate() {
            let dictionary = Arc::clone(&self.dictionary);
            let semaphore = Arc::clone(&semaphore);
            let term = term.clone();

            tasks.spawn(
                async move {
                    // Held until the lookup, retries included, is done
                    let _permit = semaphore.acquire_owned().await;
                    let entry =
                        resolve_with_retry(dictionary.as_ref(), &term, attempts, delay).await;
                    (index, term, entry)
                }
                .in_current_span(),
            );
        }

        let mut resolved = vec![None; terms.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, term, entry)) => {
                    notify(
                        progress,
                        BatchEvent::Resolved {
                            term,
                            found: entry.is_some(),
                        },
                    )
                    .await;
                    resolved[index] = entry;
                }
                // The term stays unresolved and is recorded as missing
                Err(e) => tracing::error!("Lookup task failed: {e}"),
            }
        }

        resolved
    }

    /// Save one term. Outcome lists are only updated once the collection accepted it.
    async fn commit_term(
        &self,
        prepared: &Prepared,
        term: &str,
        entry: Option<DictionaryEntry>,
        outcome: &mut BatchOutcome,
    ) -> Result<TermOutcome, CollectionError> {
        let fields = &self.config.fields;
        let tag_policy = &self.config.tags;

        let mut record = Record::new(&self.config.note, prepared.field_names.iter().cloned());
        record.add_tags_from_str(&prepared.tags);

        let found = entry.is_some();
        let mut changed = None;

        let word = match entry {
            Some(entry) => {
                let mapped = map_fields(&entry);
                write_fields(fields, &mapped, &mut record);

                let word = mapped.word.unwrap_or_else(|| term.to_string());
                if word != term {
                    changed = Some(format!("{term} → {word}"));
                }
                // Falls back to the term when the dictionary had no form for it
                try_write(&mut record, &fields.word, Some(word.as_str()));
                word
            }
            None => {
                try_write(&mut record, &fields.word, Some(term));
                term.to_string()
            }
        };

        let existing = self
            .store
            .find_notes(&self.config.note, &fields.word, &word)
            .await?;

        let term_outcome = if existing.is_empty() {
            record.add_tag(if found {
                &tag_policy.added
            } else {
                &tag_policy.missing
            });
            if changed.is_some() {
                record.add_tag(&tag_policy.changed);
            }

            let id = self.store.create_note(&prepared.deck, &record).await?;
            if found {
                TermOutcome::Added(id)
            } else {
                TermOutcome::Missing(id)
            }
        } else {
            let mut merge: Vec<String> = split_tags(&prepared.tags).map(str::to_string).collect();
            push_tag(&mut merge, &tag_policy.duplicate);
            if changed.is_some() {
                push_tag(&mut merge, &tag_policy.changed);
            }

            for id in &existing {
                self.store.merge_tags(*id, &merge).await?;
            }
            TermOutcome::Merged(existing)
        };

        if let Some(changed) = changed {
            outcome.changed.push(changed);
        }
        // Unresolved terms are only reported as missing, even when merged
        match (&term_outcome, found) {
            (_, false) => outcome.missing.push(term.to_string()),
            (TermOutcome::Added(_), true) => outcome.added.push(word),
            (_, true) => outcome.duplicates.push(word),
        }

        Ok(term_outcome)
    }
}

fn push_tag(tags: &mut Vec<String>, tag: &str) {
    let tag = tag.trim();
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

async fn notify(progress: &Option<AsyncSender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = progress {
        if let Err(e) = tx.send(event).await {
            tracing::debug!("Progress receiver gone: {e}");
        }
    }
}
