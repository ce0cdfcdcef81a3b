use jisho_config::Config;
use jisho_dictionary::{Dictionary, resolve_with_retry};

use crate::collection::CollectionStore;
use crate::error::AutofillError;
use crate::mapper::{map_fields, write_fields};
use crate::record::Record;

/// Result of filling one note, for the caller to refresh its view
#[derive(Debug, Clone, PartialEq)]
pub struct FillOutcome {
    pub word: Option<String>,
    /// Field names that received a value
    pub written: Vec<String>,
    /// False for notes still being added, which the add flow saves itself
    pub persisted: bool,
}

/// Look up the note's lookup field and write word, reading and meaning into it.
///
/// `record` is the note the caller is editing, `None` when nothing is open.
/// Validation and lookup failures leave the record untouched.
pub async fn fill_record<D, S>(
    dictionary: &D,
    store: &S,
    config: &Config,
    record: Option<&mut Record>,
) -> Result<FillOutcome, AutofillError>
where
    D: Dictionary + ?Sized,
    S: CollectionStore + ?Sized,
{
    let lookup_field = config.fields.lookup.as_str();
    if lookup_field.is_empty() {
        return Err(AutofillError::NoLookupField);
    }

    let record = record.ok_or(AutofillError::NoActiveNote)?;

    let term = record
        .try_get_field(lookup_field)
        .ok_or_else(|| AutofillError::LookupFieldNotInNote(lookup_field.to_string()))?
        .trim()
        .to_string();
    if term.is_empty() {
        return Err(AutofillError::LookupFieldEmpty(lookup_field.to_string()));
    }

    let entry = resolve_with_retry(dictionary, &term, config.retry.times, config.retry.delay())
        .await
        .ok_or_else(|| AutofillError::LookupFailed(term.clone()))?;

    let mapped = map_fields(&entry);
    let written = write_fields(&config.fields, &mapped, record);
    tracing::info!("Filled {term:?}: {}", written.join(", "));

    let persisted = !record.is_new();
    if persisted {
        store.update_note(record).await?;
    }

    Ok(FillOutcome {
        word: mapped.word,
        written,
        persisted,
    })
}
