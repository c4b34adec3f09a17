// src/api/generation.rs
//! Text generation client for the Responses endpoint.

use super::client::ServiceHttpClient;
use super::parser::parse_generation_response;
use super::responses::GenerationRequest;
use super::TextGenerator;
use crate::constants::GENERATION_MODEL;
use crate::error::{AppError, ExternalService};
use crate::types::{ApiKey, GeneratedText, RenderedPrompt, ValidatedUrl};

/// Sends one prompt to the fixed generation model and returns its text.
pub struct ResponsesClient {
    http: ServiceHttpClient,
    endpoint: ValidatedUrl,
}

impl ResponsesClient {
    pub fn new(endpoint: ValidatedUrl, api_key: &ApiKey) -> Result<Self, AppError> {
        Ok(Self {
            http: ServiceHttpClient::with_bearer(ExternalService::Generation, api_key)?,
            endpoint,
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for ResponsesClient {
    async fn generate(&self, prompt: &RenderedPrompt) -> Result<GeneratedText, AppError> {
        log::info!(
            "Requesting content ideas from {} ({} byte prompt)",
            GENERATION_MODEL,
            prompt.len()
        );

        let body = GenerationRequest {
            model: GENERATION_MODEL,
            input: prompt.as_str(),
        };
        let response = self.http.post(self.endpoint.as_url(), &body).await?;
        let result = self.http.extract_response_text(response).await?;
        let text = parse_generation_response(result)?;

        log::info!("Generation service returned {} bytes", text.len());
        Ok(text)
    }
}
