use std::time::Duration;

use jisho_types::DictionaryEntry;

use crate::Dictionary;

/// Resolve a term, retrying while the service is unreachable.
///
/// At most `max_attempts` lookups are made, with `delay` between them. A terminal
/// failure such as no results returns `None` right away.
pub async fn resolve_with_retry<D>(
    dictionary: &D,
    term: &str,
    max_attempts: u32,
    delay: Duration,
) -> Option<DictionaryEntry>
where
    D: Dictionary + ?Sized,
{
    for attempt in 1..=max_attempts {
        match dictionary.resolve(term).await {
            Ok(entry) => return Some(entry),
            Err(e) if e.is_retryable() => {
                tracing::debug!("Lookup of {term:?} failed (attempt {attempt}/{max_attempts}): {e}");
                if attempt < max_attempts {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(e) => {
                tracing::debug!("Lookup of {term:?} failed: {e}");
                return None;
            }
        }
    }

    tracing::warn!("Giving up on {term:?} after {max_attempts} attempts");
    None
}
