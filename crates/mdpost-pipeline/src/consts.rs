//! Fixed paths and tokens of the site layout contract.

/// Reference pages location under the site content directory.
pub(crate) const REFERENCE_SUBDIR: &str = "en/docs/api_sdk/sdk/reference";

/// Glob matching the generated pages inside the input directory.
///
/// Pages always live in subdirectories of the input dir; top-level files
/// (such as the summary fragment) are not reference pages.
pub(crate) const PAGES_GLOB: &str = "*/**/*.md";

/// Glob matching every markdown page under the reference directory.
pub(crate) const MARKDOWN_GLOB: &str = "**/*.md";

/// Summary fragment filename inside the input directory.
pub(crate) const SUMMARY_FILENAME: &str = "api_summary.md";

/// Placeholder token in the APIs index template, replaced by the summary.
pub(crate) const SUMMARY_TOKEN: &str = "{{REPLACEME:apis_summary}}";

/// APIs index page, relative to the reference directory.
pub(crate) const APIS_INDEX_FILENAME: &str = "apis/_index.md";

/// Suffix appended to the index filename to locate its template.
pub(crate) const TEMPLATE_SUFFIX: &str = ".template";

/// Display weight injected into every page's front matter.
pub(crate) const PAGE_WEIGHT: u32 = 10;
