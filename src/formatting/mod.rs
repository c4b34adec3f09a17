// src/formatting/mod.rs
//! Text in and text out: prompt composition, idea parsing, table output.

pub mod ideas;
pub mod prompt;
pub mod table;

pub use ideas::{parse_content_ideas, strip_enumeration_marker};
pub use prompt::PromptComposer;
pub use table::{render_trend_list, IdeaTable};
