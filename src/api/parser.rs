// src/api/parser.rs
//! Turns raw service responses into domain values or service errors.
//!
//! Everything here is pure: it works on an [`ApiResponse`] that the HTTP
//! layer already read, so it can be exercised with literal JSON.

use super::client::ApiResponse;
use super::responses::{AutocompleteResponse, GenerationErrorEnvelope, GenerationResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, ExternalService};
use crate::types::GeneratedText;

/// Extracts suggestion values from an autocomplete answer.
///
/// A missing `suggestions` field is an empty list, not an error.
pub fn parse_suggestions_response(result: ApiResponse<String>) -> Result<Vec<String>, AppError> {
    let service = ExternalService::Suggestions;

    if !result.status.is_success() {
        let message = serde_json::from_str::<AutocompleteResponse>(&result.data)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| http_failure_message(&result));
        return Err(AppError::external(service, message));
    }

    let body: AutocompleteResponse = parse_body(service, &result)?;

    if body.suggestions.is_empty() {
        if let Some(reason) = &body.error {
            log::warn!("Suggestion service returned no results: {}", reason);
        }
    }

    Ok(body.suggestions.into_iter().map(|s| s.value).collect())
}

/// Extracts the generated text from a Responses answer.
pub fn parse_generation_response(result: ApiResponse<String>) -> Result<GeneratedText, AppError> {
    let service = ExternalService::Generation;

    if !result.status.is_success() {
        let message = serde_json::from_str::<GenerationErrorEnvelope>(&result.data)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| http_failure_message(&result));
        return Err(AppError::external(service, message));
    }

    let body: GenerationResponse = parse_body(service, &result)?;
    let text = body.output_text();

    Ok(GeneratedText::new(text.trim()))
}

fn parse_body<T>(service: ExternalService, result: &ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(&result.data).map_err(|e| {
        log::error!(
            "Failed to parse response from {}: {} (body: {})",
            result.url,
            e,
            preview(&result.data)
        );
        AppError::MalformedResponse {
            service,
            message: e.to_string(),
        }
    })
}

fn http_failure_message(result: &ApiResponse<String>) -> String {
    let body = preview(&result.data);
    if body.is_empty() {
        format!("HTTP {}", result.status)
    } else {
        format!("HTTP {}: {}", result.status, body)
    }
}

fn preview(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = trimmed.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
