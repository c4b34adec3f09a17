// src/api/responses.rs
//! Wire types for the suggestion and generation services.
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! payloads is ignored by serde.

use serde::{Deserialize, Serialize};

/// Body of an autocomplete search answer.
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<AutocompleteSuggestion>,
    /// Present when the service could not answer the query.
    #[serde(default)]
    pub error: Option<String>,
}

/// One search completion.
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteSuggestion {
    pub value: String,
}

/// Request body for the Responses endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
}

/// Body of a Responses endpoint answer.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

impl GenerationResponse {
    /// Concatenates every `output_text` part of every message item.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Error envelope returned by the generation service on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationErrorEnvelope {
    pub error: GenerationErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationErrorBody {
    pub message: String,
}
