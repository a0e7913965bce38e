//! Page collection: copies generated pages into the site's reference tree.

use std::path::Path;

use crate::error::PipelineError;
use crate::fsio;
use crate::manifest::Manifest;

/// Copy every file matching `pattern` under `src_dir` into `dst_dir`,
/// preserving relative paths, and return the manifest of destination paths.
///
/// The destination directory tree must already exist; a missing directory
/// surfaces as an I/O error carrying the destination path. Existing files
/// are overwritten without conflict detection.
pub(crate) fn copy_pages(
    src_dir: &Path,
    pattern: &str,
    dst_dir: &Path,
) -> Result<Manifest, PipelineError> {
    let mut copied = Vec::new();

    for src_path in fsio::glob_files(&src_dir.join(pattern))? {
        let Ok(rel) = src_path.strip_prefix(src_dir) else {
            continue;
        };
        let dst_path = dst_dir.join(rel);
        fsio::copy(&src_path, &dst_path)?;
        copied.push(dst_path);
    }

    tracing::debug!(pages = copied.len(), "copied reference pages");
    Ok(Manifest::from_paths(copied))
}
