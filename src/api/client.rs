// src/api/client.rs
//! Pure HTTP client wrapper for the external services.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests. It handles authentication headers and turns transport
//! failures into service errors without parsing or business logic.

use crate::error::{AppError, ExternalService};
use crate::types::ApiKey;
use reqwest::{header, Client, Response};
use serde::Serialize;
use url::Url;

const USER_AGENT: &str = concat!("health-content-ideas/", env!("CARGO_PKG_VERSION"));

/// A thin wrapper around reqwest Client bound to one external service.
#[derive(Clone)]
pub struct ServiceHttpClient {
    client: Client,
    service: ExternalService,
}

impl ServiceHttpClient {
    /// Creates a client that authenticates through request parameters.
    pub fn new(service: ExternalService) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, service })
    }

    /// Creates a client that sends a bearer token with every request.
    pub fn with_bearer(service: ExternalService, api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(Self::create_headers(service, api_key)?)
            .build()?;
        Ok(Self { client, service })
    }

    fn create_headers(
        service: ExternalService,
        api_key: &ApiKey,
    ) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::ConfigurationMissing(format!(
                    "{} cannot be sent as a bearer token: {}",
                    service.credential_var(),
                    e
                ))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to a fully built URL.
    pub async fn get(&self, url: Url) -> Result<Response, AppError> {
        log::debug!("GET {}", redact_credentials(&url));

        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_failure(e))
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<T: Serialize>(&self, url: &Url, body: &T) -> Result<Response, AppError> {
        log::debug!("POST {}", url);

        self.client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_failure(e))
    }

    /// Reads the response body as text with metadata.
    pub async fn extract_response_text(
        &self,
        response: Response,
    ) -> Result<ApiResponse<String>, AppError> {
        let status = response.status();
        let url = redact_credentials(response.url());
        let text = response.text().await.map_err(|e| self.transport_failure(e))?;

        log::debug!("{} answered {} ({} bytes)", url, status, text.len());

        Ok(ApiResponse {
            data: text,
            status,
            url,
        })
    }

    fn transport_failure(&self, err: reqwest::Error) -> AppError {
        log::error!("{} request failed: {}", self.service, err);
        AppError::external(self.service, err.without_url().to_string())
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Renders a URL with any `api_key` query value masked, for logs and errors.
pub fn redact_credentials(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == "api_key") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "api_key" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_credentials_masks_api_key_only() {
        let url = Url::parse("https://serpapi.com/search.json?q=diabetes&api_key=secret123&gl=in")
            .unwrap();
        let redacted = redact_credentials(&url);
        assert!(!redacted.contains("secret123"));
        assert!(redacted.contains("api_key=***") || redacted.contains("api_key=%2A%2A%2A"));
        assert!(redacted.contains("q=diabetes"));
        assert!(redacted.contains("gl=in"));
    }

    #[test]
    fn test_bearer_headers_carry_the_key() {
        let key = ApiKey::new("sk-test-123").unwrap();
        let headers = ServiceHttpClient::create_headers(ExternalService::Generation, &key).unwrap();

        assert_eq!(headers[header::AUTHORIZATION], "Bearer sk-test-123");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_key_unusable_as_header_names_its_variable() {
        let key = ApiKey::new("sk-test\n123").unwrap();
        let err = ServiceHttpClient::with_bearer(ExternalService::Generation, &key)
            .err()
            .unwrap();

        assert!(matches!(err, AppError::ConfigurationMissing(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_redact_credentials_leaves_plain_urls_alone() {
        let url = Url::parse("https://api.openai.com/v1/responses").unwrap();
        assert_eq!(redact_credentials(&url), "https://api.openai.com/v1/responses");
    }
}
