// src/lib.rs
//! health-content-ideas library: turns patient search trends into content ideas.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ErrorKind`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `PipelineConfig`, `ServiceCredentials`
//! - **Domain types**: `Topic`, `Settings`, `NormalizedSuggestions`, `ContentIdea`
//! - **API clients**: `SuggestionRepository`, `TextGenerator` and their HTTP implementations
//! - **Formatting**: `PromptComposer`, `parse_content_ideas`, `IdeaTable`
//! - **Session**: `Session`, `RunState`, `IdeaPipeline`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod session;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, ErrorKind, ExternalService};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig, ServiceCredentials, ServiceStatus};

// --- Domain Types ---
pub use crate::model::RunResult;
pub use crate::types::{
    normalize_suggestions, ApiKey, Audience, ContentFormat, ContentIdea, GeneratedText,
    IdeaCount, NormalizedSuggestions, RenderedPrompt, Settings, Topic, ValidatedUrl,
};

// --- API Clients ---
pub use crate::api::{
    parser::{parse_generation_response, parse_suggestions_response},
    ApiResponse, AutocompleteClient, ResponsesClient, SuggestionRepository, TextGenerator,
};

// --- Formatting ---
pub use crate::formatting::{
    parse_content_ideas, render_trend_list, strip_enumeration_marker, IdeaTable, PromptComposer,
};

// --- Output ---
pub use crate::output::{deliver, export_filename, plan_download, DownloadMode};

// --- Session ---
pub use crate::pipeline::IdeaPipeline;
pub use crate::session::{parse_command, RunState, Session, SessionCommand};
