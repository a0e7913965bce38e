//! Pipeline error types.

use std::io;
use std::path::PathBuf;

/// Pipeline error type.
///
/// Every variant is fatal: the pipeline stops at the first failed
/// precondition and does not roll back files written by earlier passes.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A required directory does not exist.
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A collected page already starts with a front-matter delimiter.
    #[error("Front matter already present: {}", .0.display())]
    FrontMatterPresent(PathBuf),

    /// A collected page does not start with a `#` heading.
    #[error("Missing leading heading: {}", .0.display())]
    MissingHeading(PathBuf),

    /// A glob pattern failed to compile.
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Compilation error.
        #[source]
        source: glob::PatternError,
    },

    /// I/O error, with the path that produced it.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Wrap an I/O error with the offending path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
