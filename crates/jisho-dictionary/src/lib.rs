mod client;
mod error;
mod response;
mod retry;

pub use client::JishoClient;
pub use error::LookupError;
pub use retry::resolve_with_retry;

use async_trait::async_trait;
use jisho_types::DictionaryEntry;

/// Dictionary lookup provider
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a single term, returning the first hit
    async fn resolve(&self, term: &str) -> Result<DictionaryEntry, LookupError>;
}
