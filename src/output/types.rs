// src/output/types.rs
//! What a download produces, and what delivering it did.

use std::fmt;
use std::path::{Path, PathBuf};

/// Destination and content of one download.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryTarget {
    /// Write the CSV file
    WriteFile { path: PathBuf, content: String },
    /// Print the CSV to stdout for piping
    PrintToStdout { content: String },
}

impl fmt::Display for DeliveryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFile { path, .. } => write!(f, "{}", path.display()),
            Self::PrintToStdout { .. } => write!(f, "stdout"),
        }
    }
}

/// A target that was delivered in full.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub target: DeliveryTarget,
    pub bytes_written: usize,
}

impl Delivery {
    /// The file written, if the target was a file.
    pub fn written_file(&self) -> Option<&Path> {
        match &self.target {
            DeliveryTarget::WriteFile { path, .. } => Some(path),
            DeliveryTarget::PrintToStdout { .. } => None,
        }
    }
}
