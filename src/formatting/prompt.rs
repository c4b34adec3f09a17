// src/formatting/prompt.rs
//! Composes the generation prompt from the topic, settings, and trends.
//!
//! The built-in template ships inside the binary; operators can point
//! `--template` at their own Handlebars file, which receives the same data.

use crate::error::AppError;
use crate::types::{NormalizedSuggestions, RenderedPrompt, Settings, Topic};
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

const BUILTIN_TEMPLATE_NAME: &str = "prompt";
const BUILTIN_TEMPLATE: &str = include_str!("../../templates/prompt.hbs");

/// A registered prompt template, ready to render one prompt per run.
#[derive(Debug)]
pub struct PromptComposer {
    handlebars: Handlebars<'static>,
    name: String,
}

impl PromptComposer {
    /// Uses the template compiled into the binary.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_source(BUILTIN_TEMPLATE_NAME, BUILTIN_TEMPLATE)
    }

    /// Loads and registers a Handlebars template from disk.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let source = std::fs::read_to_string(path).map_err(|e| AppError::TemplateNotFound {
            path: path.display().to_string(),
            source: e,
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(BUILTIN_TEMPLATE_NAME)
            .to_string();

        log::info!("Using prompt template {}", path.display());
        Self::from_source(&name, &source)
    }

    fn from_source(name: &str, source: &str) -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();
        // Prompts are plain text; HTML escaping would mangle apostrophes.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(name, source)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            handlebars,
            name: name.to_string(),
        })
    }

    /// Renders the prompt for one run.
    pub fn compose(
        &self,
        topic: &Topic,
        settings: &Settings,
        suggestions: &NormalizedSuggestions,
    ) -> Result<RenderedPrompt, AppError> {
        let data = json!({
            "count": settings.count.get(),
            "format": settings.format.label(),
            "audience": settings.audience.label(),
            "topic": topic.as_str(),
            "suggestions": suggestions.as_slice(),
            "suggestion_list": suggestion_list(suggestions),
        });

        let prompt = self
            .handlebars
            .render(&self.name, &data)
            .map_err(|e| AppError::TemplateRenderError {
                name: self.name.clone(),
                message: e.to_string(),
            })?;

        log::debug!("Prompt composed: {} bytes", prompt.len());
        Ok(RenderedPrompt::new(prompt))
    }
}

/// The suggestions as a literal bracketed list of quoted strings.
fn suggestion_list(suggestions: &NormalizedSuggestions) -> String {
    let quoted: Vec<String> = suggestions
        .iter()
        .map(|s| serde_json::Value::String(s.clone()).to_string())
        .collect();
    format!("[{}]", quoted.join(", "))
}
