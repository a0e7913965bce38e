//! Five-pass post-processing pipeline over a reference directory.

use std::path::PathBuf;

use crate::consts::{PAGES_GLOB, REFERENCE_SUBDIR};
use crate::error::PipelineError;
use crate::{collect, escape, front_matter, links, summary};

/// Counters reported after a successful run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages copied into the reference directory.
    pub pages: usize,
    /// Files renamed to the canonical naming scheme.
    pub renamed: usize,
}

/// Post-processor for generated SDK reference pages.
///
/// Owns the directory layout derived from the input directory and site root
/// and runs the passes in a fixed order: collect, front matter, summary,
/// link normalization, escaping. Each pass consumes the file set left by
/// the previous one; the run aborts on the first error.
pub struct Processor {
    input_dir: PathBuf,
    site_root: PathBuf,
    content_dir: PathBuf,
    reference_dir: PathBuf,
    templates_dir: PathBuf,
}

impl Processor {
    /// Create a processor for the given input directory and site root.
    #[must_use]
    pub fn new(input_dir: PathBuf, site_root: PathBuf) -> Self {
        let content_dir = site_root.join("content");
        let reference_dir = content_dir.join(REFERENCE_SUBDIR);
        let templates_dir = site_root.join("templates");

        Self {
            input_dir,
            site_root,
            content_dir,
            reference_dir,
            templates_dir,
        }
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if a required directory is missing, a page violates
    /// the front-matter contract, or any file operation fails. Pages written
    /// by earlier passes are not rolled back.
    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        self.check_directories()?;

        let mut manifest = collect::copy_pages(&self.input_dir, PAGES_GLOB, &self.reference_dir)?;
        tracing::info!(pages = manifest.len(), "collected reference pages");

        front_matter::inject(&manifest)?;
        summary::relocate(&self.input_dir, &self.content_dir, &self.templates_dir)?;

        let mapping = links::rename_pages(&mut manifest, &self.reference_dir)?;
        links::rewrite_links(&self.reference_dir, &mapping)?;
        escape::escape_pages(&self.reference_dir)?;

        let renamed = mapping.iter().filter(|(from, to)| from != to).count();
        tracing::info!(renamed, "normalized page filenames");

        Ok(RunSummary {
            pages: manifest.len(),
            renamed,
        })
    }

    /// Verify the directory layout before touching any file.
    fn check_directories(&self) -> Result<(), PipelineError> {
        for dir in [
            &self.input_dir,
            &self.site_root,
            &self.reference_dir,
            &self.templates_dir,
        ] {
            if !dir.is_dir() {
                return Err(PipelineError::MissingDirectory(dir.clone()));
            }
        }
        Ok(())
    }
}
