// src/formatting/table.rs
//! The 1-indexed idea table: terminal rendering and CSV serialization.

use crate::constants::IDEA_COLUMN_TITLE;
use crate::error::AppError;
use crate::types::{ContentIdea, NormalizedSuggestions};
use prettytable::{row, Table};

/// A single-column table of ideas, numbered from 1.
#[derive(Debug, Clone, Copy)]
pub struct IdeaTable<'a> {
    ideas: &'a [ContentIdea],
}

impl<'a> IdeaTable<'a> {
    pub fn new(ideas: &'a [ContentIdea]) -> Self {
        Self { ideas }
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Rows as `(1-based index, idea)`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a ContentIdea)> + 'a {
        self.ideas.iter().enumerate().map(|(i, idea)| (i + 1, idea))
    }

    /// Renders the table for the terminal.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.set_titles(row!["#", IDEA_COLUMN_TITLE]);
        for (index, idea) in self.rows() {
            table.add_row(row![index, idea]);
        }
        table.to_string()
    }

    /// Serializes as CSV: `,Health Content Idea` header, then `<index>,<idea>`.
    pub fn to_csv(&self) -> Result<String, AppError> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(vec![]);

        wtr.write_record(["", IDEA_COLUMN_TITLE])?;
        for (index, idea) in self.rows() {
            wtr.write_record([index.to_string().as_str(), idea.as_str()])?;
        }

        let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

/// Lists the suggestions behind a run, numbered from 1.
pub fn render_trend_list(suggestions: &NormalizedSuggestions) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, term)| format!("{}. {}\n", i + 1, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::normalize_suggestions;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<ContentIdea> {
        vec![
            ContentIdea::new("5 Early Signs of Diabetes"),
            ContentIdea::new("Sugar, Rice, and Roti: What Really Matters?"),
            ContentIdea::new("The \"Silent\" Symptoms"),
        ]
    }

    #[test]
    fn test_csv_header_and_one_based_rows() {
        let ideas = sample();
        let csv = IdeaTable::new(&ideas).to_csv().unwrap();
        assert_eq!(
            csv,
            concat!(
                ",Health Content Idea\n",
                "1,5 Early Signs of Diabetes\n",
                "2,\"Sugar, Rice, and Roti: What Really Matters?\"\n",
                "3,\"The \"\"Silent\"\" Symptoms\"\n",
            )
        );
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let csv = IdeaTable::new(&[]).to_csv().unwrap();
        assert_eq!(csv, ",Health Content Idea\n");
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let ideas = sample();
        let table = IdeaTable::new(&ideas);
        let indices: Vec<usize> = table.rows().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_render_contains_every_idea() {
        let ideas = sample();
        let rendered = IdeaTable::new(&ideas).render();
        assert!(rendered.contains(IDEA_COLUMN_TITLE));
        for idea in &ideas {
            assert!(rendered.contains(idea.as_str()));
        }
    }

    #[test]
    fn test_trend_list_is_numbered() {
        let suggestions = normalize_suggestions(["diabetes test", "diabetes diet"]);
        assert_eq!(
            render_trend_list(&suggestions),
            "1. diabetes diet\n2. diabetes test\n"
        );
    }
}
