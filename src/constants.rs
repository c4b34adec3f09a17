// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Reading these constants should tell you where the tool looks for
//! trends, which model writes the ideas, and what the download looks like.

// ---------------------------------------------------------------------------
// Search suggestion service
// ---------------------------------------------------------------------------

/// Default endpoint of the autocomplete search service.
pub const SEARCH_API_URL: &str = "https://serpapi.com/search.json";

/// Engine marker sent with every suggestion query.
pub const SEARCH_ENGINE: &str = "google_autocomplete";

/// Interface language of the suggestions.
pub const SEARCH_LANGUAGE: &str = "en";

/// Country the suggestions are scoped to. Trends come from India only.
pub const SEARCH_COUNTRY: &str = "in";

/// Environment variable holding the search service credential.
pub const SEARCH_API_KEY_VAR: &str = "SERPAPI_API_KEY";

// ---------------------------------------------------------------------------
// Text generation service
// ---------------------------------------------------------------------------

/// Default endpoint of the text generation service.
pub const GENERATION_API_URL: &str = "https://api.openai.com/v1/responses";

/// The fixed model every prompt is sent to.
pub const GENERATION_MODEL: &str = "gpt-4.1-mini";

/// Environment variable holding the generation service credential.
pub const GENERATION_API_KEY_VAR: &str = "OPENAI_API_KEY";

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Column title of the idea table and the CSV header.
pub const IDEA_COLUMN_TITLE: &str = "Health Content Idea";

/// Appended to the topic-derived stem of the download filename.
pub const EXPORT_FILENAME_SUFFIX: &str = "_health_content_ideas.csv";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
