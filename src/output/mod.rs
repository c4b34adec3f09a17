// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! The download is planned as a pure [`DeliveryTarget`] from a
//! [`RunResult`] and only then handed to the writer, the single place
//! doing I/O.

mod paths;
mod types;
mod writer;

pub use paths::{export_filename, export_path};
pub use types::{Delivery, DeliveryTarget};
pub use writer::deliver;

use crate::error::AppError;
use crate::formatting::IdeaTable;
use crate::model::RunResult;
use std::path::Path;

/// Where a download should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMode<'a> {
    /// Write `<stem>_health_content_ideas.csv` under this directory
    File(&'a Path),
    /// Print the CSV to stdout
    Pipe,
}

/// Plans the CSV download for a finished run.
pub fn plan_download(
    result: &RunResult,
    mode: DownloadMode<'_>,
) -> Result<DeliveryTarget, AppError> {
    let content = IdeaTable::new(&result.ideas).to_csv()?;

    Ok(match mode {
        DownloadMode::File(dir) => DeliveryTarget::WriteFile {
            path: export_path(dir, &result.topic),
            content,
        },
        DownloadMode::Pipe => DeliveryTarget::PrintToStdout { content },
    })
}
