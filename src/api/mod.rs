// src/api/mod.rs
//! Clients for the two external services a run depends on.
//!
//! Each service sits behind a small async trait so the pipeline can be
//! driven by in-memory doubles in tests.

pub mod client;
pub mod generation;
pub mod parser;
pub mod responses;
pub mod suggestions;

use crate::error::AppError;
use crate::types::{GeneratedText, RenderedPrompt, Topic};

pub use client::{ApiResponse, ServiceHttpClient};
pub use generation::ResponsesClient;
pub use suggestions::AutocompleteClient;

/// Source of raw search suggestions for a topic.
///
/// Implementations issue exactly one query per call and never retry.
#[async_trait::async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn fetch_suggestions(&self, topic: &Topic) -> Result<Vec<String>, AppError>;
}

/// Turns a prompt into generated text with a single request.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &RenderedPrompt) -> Result<GeneratedText, AppError>;
}
