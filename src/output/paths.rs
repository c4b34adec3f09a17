// src/output/paths.rs
//! Pure functions for download naming and placement.

use crate::constants::EXPORT_FILENAME_SUFFIX;
use crate::types::Topic;
use std::path::{Path, PathBuf};

/// `<topic with whitespace as underscores>_health_content_ideas.csv`
pub fn export_filename(topic: &Topic) -> String {
    format!("{}{}", topic.export_stem(), EXPORT_FILENAME_SUFFIX)
}

/// Where the download for `topic` lands inside `output_dir`.
pub fn export_path(output_dir: &Path, topic: &Topic) -> PathBuf {
    output_dir.join(export_filename(topic))
}
