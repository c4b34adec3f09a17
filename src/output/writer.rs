// src/output/writer.rs
//! Executes a delivery by performing the actual I/O.
//!
//! This module is the only place where file I/O occurs, keeping the rest
//! of the output path pure and testable.

use super::types::{Delivery, DeliveryTarget};
use crate::error::AppError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes the target's content to its destination.
pub fn deliver(target: DeliveryTarget) -> Result<Delivery, AppError> {
    let bytes_written = match &target {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::PrintToStdout { content } => print_to_stdout(content),
    }
    .map_err(|source| {
        log::error!("Delivery to {} failed: {}", target, source);
        AppError::DeliveryFailed {
            target: target.to_string(),
            source,
        }
    })?;

    log::info!("Delivered {} bytes to {}", bytes_written, target);
    Ok(Delivery {
        target,
        bytes_written,
    })
}

fn write_file(path: &Path, content: &str) -> io::Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    Ok(content.len())
}

fn print_to_stdout(content: &str) -> io::Result<usize> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "health_content_ideas_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = scratch_dir("writer");
        let path = dir.join("nested").join("acne_health_content_ideas.csv");

        let delivery = deliver(DeliveryTarget::WriteFile {
            path: path.clone(),
            content: ",Health Content Idea\n1,Idea\n".to_string(),
        })
        .unwrap();

        assert_eq!(delivery.bytes_written, 28);
        assert_eq!(delivery.written_file(), Some(path.as_path()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            ",Health Content Idea\n1,Idea\n"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failed_write_names_the_target() {
        let dir = scratch_dir("writer_fail");
        fs::create_dir_all(&dir).unwrap();

        // A directory cannot be overwritten as a file.
        let err = deliver(DeliveryTarget::WriteFile {
            path: dir.clone(),
            content: "x".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, AppError::DeliveryFailed { .. }));
        assert!(err.to_string().contains(&dir.display().to_string()));

        let _ = fs::remove_dir_all(&dir);
    }
}
