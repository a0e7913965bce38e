//! Path-carrying wrappers over `std::fs` and glob expansion.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::MARKDOWN_GLOB;
use crate::error::PipelineError;

/// Read a file to a string, attaching the path to any error.
pub(crate) fn read(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))
}

/// Write a string to a file, attaching the path to any error.
pub(crate) fn write(path: &Path, contents: &str) -> Result<(), PipelineError> {
    fs::write(path, contents).map_err(|e| PipelineError::io(path, e))
}

/// Rename a file, attaching the source path to any error.
pub(crate) fn rename(from: &Path, to: &Path) -> Result<(), PipelineError> {
    fs::rename(from, to).map_err(|e| PipelineError::io(from, e))
}

/// Copy a file, attaching the destination path to any error.
pub(crate) fn copy(from: &Path, to: &Path) -> Result<(), PipelineError> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| PipelineError::io(to, e))
}

/// Every markdown file under `dir`, recursively, in traversal order.
pub(crate) fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    glob_files(&dir.join(MARKDOWN_GLOB))
}

/// Expand a glob pattern into the matching file paths.
pub(crate) fn glob_files(pattern: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let pattern = pattern.to_string_lossy();
    let entries = glob::glob(&pattern).map_err(|e| PipelineError::Pattern {
        pattern: pattern.clone().into_owned(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            PipelineError::Io {
                path,
                source: e.into_error(),
            }
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
