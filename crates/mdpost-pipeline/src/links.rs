//! Filename canonicalization and cross-page link rewriting.
//!
//! Hugo derives page URLs by lowercasing filenames, which turns camel-case
//! names like `AuthApi.md` into unreadable (and, for cross-page links,
//! broken) `authapi` URLs. This pass renames every collected page to a
//! lowercase hyphen-separated form and then rewrites link targets across the
//! whole reference tree. The full rename mapping is computed before any link
//! is rewritten, so a target is never rewritten into a name that is itself
//! about to change.

use std::path::Path;

use regex::Regex;

use crate::code_spans::map_prose;
use crate::error::PipelineError;
use crate::fsio;
use crate::manifest::Manifest;

/// Rename mapping from original to canonical relative filenames.
pub(crate) type RenameMapping = Vec<(String, String)>;

/// Convert camel-case runs in a filename to lowercase hyphen-separated form.
///
/// A hyphen is inserted before an upper-case letter that follows a
/// lower-case letter or digit, and before the last letter of an upper-case
/// run followed by a lower-case letter (`HTTPApi` → `http-api`). Underscores
/// become hyphens; path separators and all other characters pass through.
pub(crate) fn canonical_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1);
            let after_word = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            let run_end = prev.is_some_and(|p| p.is_ascii_uppercase())
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if after_word || run_end {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }

    out
}

/// Rename every manifest page to its canonical filename.
///
/// Returns the rename mapping in manifest order and rebuilds the manifest
/// from the new paths.
pub(crate) fn rename_pages(
    manifest: &mut Manifest,
    reference_dir: &Path,
) -> Result<RenameMapping, PipelineError> {
    let mut mapping = RenameMapping::new();
    let mut renamed = Vec::new();

    for path in manifest.iter() {
        let Ok(rel) = path.strip_prefix(reference_dir) else {
            continue;
        };
        let rel = rel.to_string_lossy().into_owned();
        let canonical = canonical_name(&rel);
        let dst_path = reference_dir.join(&canonical);

        if rel != canonical {
            fsio::rename(path, &dst_path)?;
        }

        renamed.push(dst_path);
        mapping.push((rel, canonical));
    }

    manifest.replace(renamed);
    Ok(mapping)
}

/// One compiled link-rewrite rule.
struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

/// Link-target rewriter built from a rename mapping.
///
/// For a mapping entry `apis/AuthApi.md` → `apis/auth-api.md`, link targets
/// of the form `[text](AuthApi)`, `[text](authapi.md)`, `[text](../AuthApi)`
/// or `[text](apis/AuthApi#anchor)` are rewritten to the canonical stem with
/// one `../` segment prepended, preserving any subdirectory prefix,
/// extension, and anchor. Both the original stem and its all-lowercase form
/// are matched, so targets already lowercased by the generator are caught
/// too.
pub(crate) struct LinkRewriter {
    rules: Vec<RewriteRule>,
}

impl LinkRewriter {
    /// Compile rewrite rules from a rename mapping.
    pub(crate) fn new(mapping: &[(String, String)]) -> Self {
        let rules = mapping
            .iter()
            .filter_map(|(original, canonical)| rule_for(original, canonical))
            .collect();
        Self { rules }
    }

    /// Apply every rule to the page text, leaving code spans untouched.
    pub(crate) fn apply(&self, contents: &str) -> String {
        map_prose(contents, |prose| {
            let mut text = prose.to_owned();
            for rule in &self.rules {
                text = rule
                    .pattern
                    .replace_all(&text, rule.replacement.as_str())
                    .into_owned();
            }
            text
        })
    }
}

/// Build the rewrite rule for one mapping entry.
///
/// The target stem is matched against the original stem and its
/// all-lowercase form. A form that coincides with the canonical stem is
/// dropped: it would also match already-rewritten targets and stack `../`
/// prefixes on a second run. An entry with no form left (a name without any
/// camel boundary) is skipped entirely, leaving its cross-references
/// untouched.
fn rule_for(original: &str, canonical: &str) -> Option<RewriteRule> {
    let src = Path::new(original);
    let src_stem = src.file_stem()?.to_str()?;
    let dst_stem = Path::new(canonical).file_stem()?.to_str()?;

    let mut stems = vec![src_stem.to_owned()];
    let lowercase = src_stem.to_ascii_lowercase();
    if lowercase != src_stem {
        stems.push(lowercase);
    }
    stems.retain(|stem| stem != dst_stem);
    if stems.is_empty() {
        tracing::debug!(original, "skipping link rewrite for caseless filename");
        return None;
    }

    let dir_part = match src.parent().filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) => format!("(?:{}/)?", regex::escape(&dir.to_string_lossy())),
        None => String::new(),
    };

    let stem_part = stems
        .iter()
        .map(|stem| regex::escape(stem))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(\[.*?\]\()((?:\.\./)?{dir_part})(?:{stem_part})(\.md)?((?:#[^)]*?)?\))"
    );
    let pattern = Regex::new(&pattern).expect("rewrite pattern is valid by construction");

    let replacement = format!("${{1}}../${{2}}{}${{3}}${{4}}", dst_stem.replace('$', "$$"));

    Some(RewriteRule {
        pattern,
        replacement,
    })
}

/// Rewrite link targets in every markdown page under the reference tree.
///
/// Runs over the full page set, not just the manifest, so references from
/// index pages and between any two pages resolve under the new names.
pub(crate) fn rewrite_links(
    reference_dir: &Path,
    mapping: &[(String, String)],
) -> Result<(), PipelineError> {
    let rewriter = LinkRewriter::new(mapping);

    for page in fsio::markdown_files(reference_dir)? {
        let contents = fsio::read(&page)?;
        let rewritten = rewriter.apply(&contents);
        if rewritten != contents {
            fsio::write(&page, &rewritten)?;
            tracing::debug!(path = %page.display(), "rewrote page links");
        }
    }
    Ok(())
}
