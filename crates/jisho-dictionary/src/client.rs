use std::time::Duration;

use async_trait::async_trait;
use jisho_types::DictionaryEntry;

use crate::Dictionary;
use crate::error::LookupError;
use crate::response::SearchResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// jisho.org word search client
#[derive(Clone)]
pub struct JishoClient {
    base_url: String,
    client: reqwest::Client,
}

impl JishoClient {
    pub fn new(base_url: String) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }
}

#[async_trait]
impl Dictionary for JishoClient {
    async fn resolve(&self, term: &str) -> Result<DictionaryEntry, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("keyword", term)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 || status.is_server_error() {
            return Err(LookupError::Unreachable(format!("HTTP {}", status)));
        }

        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        parsed
            .into_first_entry()
            .ok_or_else(|| LookupError::NoResults(term.to_string()))
    }
}
