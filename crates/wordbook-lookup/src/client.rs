use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use wordbook_config::network::NetworkConfig;
use wordbook_types::{Suggestion, WordRecord};

use crate::error::LookupError;

/// Datamuse API client: builds query URLs and decodes JSON responses.
#[derive(Clone)]
pub struct DatamuseClient {
    base_url: String,
    http: reqwest::Client,
}

impl DatamuseClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            http,
        })
    }

    /// URL for the synonym-of relation with syllable and frequency metadata.
    pub fn synonym_url(&self, query: &str) -> Result<Url, LookupError> {
        self.words_url(&[("rel_syn", query), ("md", "s,f")])
    }

    /// URL for an exact-spelling match carrying definition metadata.
    pub fn definition_url(&self, query: &str) -> Result<Url, LookupError> {
        self.words_url(&[("sp", query), ("md", "d")])
    }

    /// URL for prefix autocomplete.
    pub fn suggestion_url(&self, input: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(&format!("{}/sug", self.base_url), &[("s", input)])
            .map_err(LookupError::from)
    }

    fn words_url(&self, params: &[(&str, &str)]) -> Result<Url, LookupError> {
        Url::parse_with_params(&format!("{}/words", self.base_url), params)
            .map_err(LookupError::from)
    }

    pub async fn words(&self, url: Url) -> Result<Vec<WordRecord>, LookupError> {
        self.fetch(url).await
    }

    pub async fn suggestions(&self, url: Url) -> Result<Vec<Suggestion>, LookupError> {
        self.fetch(url).await
    }

    async fn fetch<T>(&self, url: Url) -> Result<T, LookupError>
    where
        T: DeserializeOwned,
    {
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
