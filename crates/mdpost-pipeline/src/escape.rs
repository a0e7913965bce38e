//! Markdown parsing repairs outside code spans.
//!
//! Generated model and API descriptions carry bare URLs and free-standing
//! square brackets that the site's Markdown renderer misreads as broken
//! links. This pass wraps bare URLs in angle brackets and escapes orphan
//! bracket spans, while leaving fenced and inline code untouched.

use std::path::Path;

use regex::Regex;

use crate::code_spans::map_prose;
use crate::error::PipelineError;
use crate::fsio;

/// Bare URL pattern: scheme, host or IPv4 address, optional port and path,
/// bounded by whitespace, `.`, or a string edge.
const URL_PATTERN: &str = concat!(
    r"(\A|[.\s])(",
    r"https?://",
    r"(?:",
    r"(?:www\.)?",
    r"(?:[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]\.)+",
    r"[a-zA-Z]{2,6}",
    r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
    r")",
    r"(?::\d{1,5})?",
    r"(?:(?:/\S+)*|/)",
    r")([.\s]|\z)",
);

/// A `[...]` span whose closing bracket is not followed by `(`, i.e. not a
/// Markdown link.
const ORPHAN_BRACKET_PATTERN: &str = r"\[([^\[\]]*?)\]([^(])";

/// Prose filters for reference pages.
pub(crate) struct Escaper {
    url: Regex,
    orphan_bracket: Regex,
}

impl Escaper {
    /// Compile the prose filters.
    ///
    /// # Panics
    ///
    /// Panics if the internal patterns fail to compile. This should never
    /// happen as both are compile-time constants.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            url: Regex::new(URL_PATTERN).unwrap(),
            orphan_bracket: Regex::new(ORPHAN_BRACKET_PATTERN).unwrap(),
        }
    }

    /// Apply both filters to the text outside code spans.
    pub(crate) fn escape(&self, text: &str) -> String {
        map_prose(text, |prose| {
            let bracketed = self.bracket_bare_urls(prose);
            self.escape_orphan_brackets(&bracketed)
        })
    }

    /// Wrap bare URLs in angle brackets so the renderer treats them as
    /// explicit links.
    fn bracket_bare_urls(&self, text: &str) -> String {
        self.url.replace_all(text, "${1}<${2}>${3}").into_owned()
    }

    /// Escape free-standing `[...]` spans so the renderer does not parse
    /// them as link references.
    fn escape_orphan_brackets(&self, text: &str) -> String {
        self.orphan_bracket
            .replace_all(text, r"\[${1}\]${2}")
            .into_owned()
    }
}

/// Escape every markdown page under the reference tree, in place.
pub(crate) fn escape_pages(reference_dir: &Path) -> Result<(), PipelineError> {
    let escaper = Escaper::new();

    for page in fsio::markdown_files(reference_dir)? {
        let contents = fsio::read(&page)?;
        let escaped = escaper.escape(&contents);
        if escaped != contents {
            fsio::write(&page, &escaped)?;
            tracing::debug!(path = %page.display(), "escaped page");
        }
    }
    Ok(())
}
