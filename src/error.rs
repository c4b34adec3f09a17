// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each variant names the stage that failed and carries the message the
//! operator sees, so the session can map it to a terminal run state.

use std::fmt;
use thiserror::Error;

/// The external collaborators a run talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalService {
    /// The search-suggestion (autocomplete) service
    Suggestions,
    /// The text-generation service
    Generation,
}

impl ExternalService {
    /// The environment variable that carries this service's credential.
    pub fn credential_var(&self) -> &'static str {
        match self {
            Self::Suggestions => crate::constants::SEARCH_API_KEY_VAR,
            Self::Generation => crate::constants::GENERATION_API_KEY_VAR,
        }
    }
}

impl fmt::Display for ExternalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suggestions => write!(f, "search suggestion service"),
            Self::Generation => write!(f, "text generation service"),
        }
    }
}

/// Coarse classification the run orchestrator dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required credential is absent
    ConfigurationMissing,
    /// The topic was blank
    EmptyInput,
    /// An external call failed
    ExternalService(ExternalService),
    /// The fetch succeeded but produced nothing to work with
    NoTrendsFound,
    /// Anything local: IO, templates, serialization
    Internal,
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    #[error("Please enter a health topic")]
    EmptyInput,

    #[error("{service} error: {message}")]
    ExternalService {
        service: ExternalService,
        message: String,
    },

    #[error("No health trends found for '{topic}'. Try a different keyword.")]
    NoTrendsFound { topic: String },

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response from {service}: {message}")]
    MalformedResponse {
        service: ExternalService,
        message: String,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("Could not deliver to {target}: {source}")]
    DeliveryFailed {
        target: String,
        source: std::io::Error,
    },

    #[error("No content ideas to download yet. Generate some first.")]
    NothingToDeliver,

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Wraps a failure of one of the external services.
    pub fn external(service: ExternalService, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service,
            message: message.into(),
        }
    }

    /// Classifies this error for the run state machine.
    ///
    /// Transport errors are only ever produced by the HTTP clients, but
    /// the clients convert them before returning, so a bare `Network`
    /// here did not come from a known service.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigurationMissing(_) => ErrorKind::ConfigurationMissing,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::ExternalService { service, .. } | Self::MalformedResponse { service, .. } => {
                ErrorKind::ExternalService(*service)
            }
            Self::NoTrendsFound { .. } => ErrorKind::NoTrendsFound,
            _ => ErrorKind::Internal,
        }
    }

    /// Whether the operator should see this as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyInput | ErrorKind::NoTrendsFound
        )
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::TemplateRenderError {
            name: "formatter".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_errors_surface_message_verbatim() {
        let err = AppError::external(ExternalService::Generation, "Incorrect API key provided");
        assert_eq!(
            err.to_string(),
            "text generation service error: Incorrect API key provided"
        );
        assert_eq!(
            err.kind(),
            ErrorKind::ExternalService(ExternalService::Generation)
        );
    }

    #[test]
    fn warnings_are_distinct_from_errors() {
        assert!(AppError::EmptyInput.is_warning());
        assert!(AppError::NoTrendsFound {
            topic: "x".to_string()
        }
        .is_warning());
        assert!(!AppError::ConfigurationMissing("key".to_string()).is_warning());
        assert!(!AppError::external(ExternalService::Suggestions, "boom").is_warning());
    }

    #[test]
    fn malformed_responses_count_as_service_failures() {
        let err = AppError::MalformedResponse {
            service: ExternalService::Suggestions,
            message: "expected value at line 1".to_string(),
        };
        assert_eq!(
            err.kind(),
            ErrorKind::ExternalService(ExternalService::Suggestions)
        );
    }
}
