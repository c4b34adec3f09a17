// src/api/suggestions.rs
//! Autocomplete search client scoped to English suggestions from India.

use super::client::ServiceHttpClient;
use super::parser::parse_suggestions_response;
use super::SuggestionRepository;
use crate::constants::{SEARCH_COUNTRY, SEARCH_ENGINE, SEARCH_LANGUAGE};
use crate::error::{AppError, ExternalService};
use crate::types::{ApiKey, Topic, ValidatedUrl};
use url::Url;

/// Fetches search completions through the SerpApi autocomplete engine.
pub struct AutocompleteClient {
    http: ServiceHttpClient,
    endpoint: ValidatedUrl,
    api_key: ApiKey,
}

impl AutocompleteClient {
    pub fn new(endpoint: ValidatedUrl, api_key: ApiKey) -> Result<Self, AppError> {
        Ok(Self {
            http: ServiceHttpClient::new(ExternalService::Suggestions)?,
            endpoint,
            api_key,
        })
    }
}

/// Builds the single query URL for a topic.
pub fn suggestion_request_url(endpoint: &ValidatedUrl, topic: &Topic, api_key: &ApiKey) -> Url {
    let mut url = endpoint.as_url().clone();
    url.query_pairs_mut()
        .append_pair("engine", SEARCH_ENGINE)
        .append_pair("q", topic.as_str())
        .append_pair("hl", SEARCH_LANGUAGE)
        .append_pair("gl", SEARCH_COUNTRY)
        .append_pair("api_key", api_key.as_str());
    url
}

#[async_trait::async_trait]
impl SuggestionRepository for AutocompleteClient {
    async fn fetch_suggestions(&self, topic: &Topic) -> Result<Vec<String>, AppError> {
        log::info!("Searching health trends for: {}", topic);

        let url = suggestion_request_url(&self.endpoint, topic, &self.api_key);
        let response = self.http.get(url).await?;
        let result = self.http.extract_response_text(response).await?;
        let values = parse_suggestions_response(result)?;

        log::info!("Suggestion service returned {} raw entries", values.len());
        Ok(values)
    }
}
