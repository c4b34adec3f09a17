// src/model.rs
//! The outcome of one successful run.

use crate::types::{ContentIdea, NormalizedSuggestions, Settings, Topic};
use chrono::{DateTime, Utc};

/// Everything a completed run produced.
///
/// Only built after both external stages succeeded; a failed run leaves
/// no `RunResult` behind.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub topic: Topic,
    pub settings: Settings,
    pub suggestions: NormalizedSuggestions,
    pub ideas: Vec<ContentIdea>,
    pub completed_at: DateTime<Utc>,
}

impl RunResult {
    /// The display statistic shown beside the table.
    pub fn trends_analyzed(&self) -> usize {
        self.suggestions.len()
    }

    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    /// Completion time for the result banner, in UTC.
    pub fn completed_label(&self) -> String {
        self.completed_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}
