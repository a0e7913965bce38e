//! Front-matter injection for collected reference pages.
//!
//! Hugo only publishes pages that carry a front-matter block. Generated
//! reference pages start with a plain `#` heading instead, so this pass
//! replaces that heading line with a block derived from it.

use std::path::Path;

use crate::consts::PAGE_WEIGHT;
use crate::error::PipelineError;
use crate::fsio;
use crate::manifest::Manifest;

/// Front-matter delimiter line.
const DELIMITER: &str = "---";

/// Site metadata block injected at the top of a reference page.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FrontMatter {
    title: String,
    weight: u32,
}

impl FrontMatter {
    fn new(title: &str, weight: u32) -> Self {
        Self {
            title: title.to_owned(),
            weight,
        }
    }

    /// Render the block, including both delimiter lines and a trailing
    /// newline, so the page body can be appended directly.
    fn render(&self) -> String {
        format!(
            "{delim}\n\
             title: '{title}'\n\
             linkTitle: '{title}'\n\
             weight: {weight}\n\
             description: ''\n\
             {delim}\n",
            delim = DELIMITER,
            title = self.title,
            weight = self.weight,
        )
    }
}

/// Extract the page title from the first line.
///
/// The first line must start with a `#` heading marker; the title is the
/// line with the marker removed and surrounding whitespace trimmed.
fn extract_title<'a>(contents: &'a str, path: &Path) -> Result<&'a str, PipelineError> {
    let first_line = contents.lines().next().unwrap_or("");
    let Some(heading) = first_line.strip_prefix('#') else {
        return Err(PipelineError::MissingHeading(path.to_path_buf()));
    };
    Ok(heading.trim())
}

/// Inject a front-matter block into every manifest page, in place.
///
/// The heading line is consumed by the block; the body starts at the second
/// line of the original page. A page that already starts with a front-matter
/// delimiter was processed outside this pipeline and is a contract
/// violation.
pub(crate) fn inject(manifest: &Manifest) -> Result<(), PipelineError> {
    for path in manifest.iter() {
        let contents = fsio::read(path)?;

        if contents.starts_with(DELIMITER) {
            return Err(PipelineError::FrontMatterPresent(path.to_path_buf()));
        }

        let title = extract_title(&contents, path)?;
        let header = FrontMatter::new(title, PAGE_WEIGHT).render();

        let body: Vec<&str> = contents.lines().skip(1).collect();
        let rewritten = header + &body.join("\n");
        fsio::write(path, &rewritten)?;

        tracing::debug!(path = %path.display(), "injected front matter");
    }
    Ok(())
}
