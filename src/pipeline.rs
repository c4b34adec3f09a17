// src/pipeline.rs
//! The two external stages of a run: fetch trends, then generate text.
//!
//! Each stage returns an explicit `Result`; the session decides which run
//! state an error maps to.

use crate::api::{AutocompleteClient, ResponsesClient, SuggestionRepository, TextGenerator};
use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::formatting::PromptComposer;
use crate::types::{normalize_suggestions, GeneratedText, NormalizedSuggestions, Settings, Topic};
use std::sync::Arc;

/// The wired-up services and prompt template for a session.
pub struct IdeaPipeline {
    suggestions: Arc<dyn SuggestionRepository>,
    generator: Arc<dyn TextGenerator>,
    composer: PromptComposer,
}

impl IdeaPipeline {
    pub fn new(
        suggestions: Arc<dyn SuggestionRepository>,
        generator: Arc<dyn TextGenerator>,
        composer: PromptComposer,
    ) -> Self {
        Self {
            suggestions,
            generator,
            composer,
        }
    }

    /// Builds the HTTP-backed pipeline; fails with `ConfigurationMissing`
    /// when either credential is absent.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, AppError> {
        let (search_key, generation_key) = config.credentials.require()?;

        let suggestions =
            AutocompleteClient::new(config.search_url.clone(), search_key.clone())?;
        let generator = ResponsesClient::new(config.generation_url.clone(), generation_key)?;
        let composer = match &config.template {
            Some(path) => PromptComposer::from_file(path)?,
            None => PromptComposer::builtin()?,
        };

        Ok(Self::new(Arc::new(suggestions), Arc::new(generator), composer))
    }

    /// Fetches and normalizes suggestions for `topic`.
    ///
    /// An empty normalized set is `NoTrendsFound`, so the generator is never
    /// called without trends.
    pub async fn fetch_trends(&self, topic: &Topic) -> Result<NormalizedSuggestions, AppError> {
        let raw = self.suggestions.fetch_suggestions(topic).await?;
        let normalized = normalize_suggestions(raw);

        if normalized.is_empty() {
            log::warn!("No health trends found for '{}'", topic);
            return Err(AppError::NoTrendsFound {
                topic: topic.to_string(),
            });
        }

        log::info!("Found {} health search trends", normalized.len());
        Ok(normalized)
    }

    /// Composes the prompt and sends it to the generator.
    pub async fn generate(
        &self,
        topic: &Topic,
        settings: &Settings,
        suggestions: &NormalizedSuggestions,
    ) -> Result<GeneratedText, AppError> {
        let prompt = self.composer.compose(topic, settings, suggestions)?;
        self.generator.generate(&prompt).await
    }
}
