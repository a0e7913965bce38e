//! Post-processing pipeline for generated Markdown reference pages.
//!
//! SDK doc generators emit Markdown that a Hugo-style site cannot publish
//! as-is: pages lack front matter, filenames are camel-case, cross-page
//! links break once Hugo lowercases them, and bare URLs or stray square
//! brackets confuse the Markdown renderer.
//!
//! [`Processor`] repairs all of that with five passes, in order:
//!
//! 1. collect the generated pages into the site's reference directory,
//! 2. inject front matter derived from each page's first heading,
//! 3. splice the shared API summary into the APIs index page,
//! 4. rename files to lowercase-hyphen form and rewrite links to match,
//! 5. bracket bare URLs and escape orphan `[...]` spans outside code.
//!
//! The pipeline is synchronous and fail-fast: the first failed precondition
//! aborts the run with a [`PipelineError`] naming the offending path.

mod code_spans;
mod collect;
mod consts;
mod error;
mod escape;
mod front_matter;
mod fsio;
mod links;
mod manifest;
mod processor;
mod summary;

pub use error::PipelineError;
pub use manifest::Manifest;
pub use processor::{Processor, RunSummary};
