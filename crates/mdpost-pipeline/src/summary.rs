//! API summary relocation into the APIs index page.

use std::ffi::OsString;
use std::path::Path;

use crate::consts::{
    APIS_INDEX_FILENAME, REFERENCE_SUBDIR, SUMMARY_FILENAME, SUMMARY_TOKEN, TEMPLATE_SUFFIX,
};
use crate::error::PipelineError;
use crate::fsio;

/// Substitute the API summary fragment into the APIs index template and
/// write the result into the content tree.
///
/// The template lives under the templates directory at the same relative
/// location the index page has under the content directory, with a
/// `.template` suffix. The token is replaced once; a template without the
/// token is written through unchanged (with a warning), matching the
/// substitution contract rather than failing the run.
pub(crate) fn relocate(
    input_dir: &Path,
    content_dir: &Path,
    templates_dir: &Path,
) -> Result<(), PipelineError> {
    let summary = fsio::read(&input_dir.join(SUMMARY_FILENAME))?;

    let index_rel = Path::new(REFERENCE_SUBDIR).join(APIS_INDEX_FILENAME);
    let mut template_name = OsString::from(index_rel.as_os_str());
    template_name.push(TEMPLATE_SUFFIX);
    let template_path = templates_dir.join(&template_name);

    let template = fsio::read(&template_path)?;
    if !template.contains(SUMMARY_TOKEN) {
        tracing::warn!(
            path = %template_path.display(),
            token = SUMMARY_TOKEN,
            "placeholder token not found in template"
        );
    }
    let contents = template.replacen(SUMMARY_TOKEN, &summary, 1);

    let index_path = content_dir.join(&index_rel);
    fsio::write(&index_path, &contents)?;

    tracing::debug!(path = %index_path.display(), "wrote APIs index page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    struct Fixture {
        _temp_dir: tempfile::TempDir,
        input_dir: PathBuf,
        content_dir: PathBuf,
        templates_dir: PathBuf,
    }

    fn create_fixture(template: &str) -> Fixture {
        let temp_dir = tempfile::tempdir().unwrap();
        let input_dir = temp_dir.path().join("input");
        let content_dir = temp_dir.path().join("content");
        let templates_dir = temp_dir.path().join("templates");

        fs::create_dir_all(&input_dir).unwrap();
        fs::create_dir_all(content_dir.join(REFERENCE_SUBDIR).join("apis")).unwrap();

        let template_dir = templates_dir.join(REFERENCE_SUBDIR).join("apis");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("_index.md.template"), template).unwrap();
        fs::write(input_dir.join(SUMMARY_FILENAME), "## All APIs\n\n- AuthApi\n").unwrap();

        Fixture {
            _temp_dir: temp_dir,
            input_dir,
            content_dir,
            templates_dir,
        }
    }

    #[test]
    fn test_substitutes_token_once() {
        let fixture = create_fixture("Intro.\n\n{{REPLACEME:apis_summary}}\n\nOutro.\n");

        relocate(
            &fixture.input_dir,
            &fixture.content_dir,
            &fixture.templates_dir,
        )
        .unwrap();

        let index = fs::read_to_string(
            fixture
                .content_dir
                .join(REFERENCE_SUBDIR)
                .join("apis/_index.md"),
        )
        .unwrap();
        assert_eq!(index, "Intro.\n\n## All APIs\n\n- AuthApi\n\n\nOutro.\n");
    }

    #[test]
    fn test_template_without_token_written_unchanged() {
        let fixture = create_fixture("No placeholder here.\n");

        relocate(
            &fixture.input_dir,
            &fixture.content_dir,
            &fixture.templates_dir,
        )
        .unwrap();

        let index = fs::read_to_string(
            fixture
                .content_dir
                .join(REFERENCE_SUBDIR)
                .join("apis/_index.md"),
        )
        .unwrap();
        assert_eq!(index, "No placeholder here.\n");
    }

    #[test]
    fn test_missing_summary_fails() {
        let fixture = create_fixture("{{REPLACEME:apis_summary}}");
        fs::remove_file(fixture.input_dir.join(SUMMARY_FILENAME)).unwrap();

        let result = relocate(
            &fixture.input_dir,
            &fixture.content_dir,
            &fixture.templates_dir,
        );

        assert!(matches!(result, Err(PipelineError::Io { .. })));
    }

    #[test]
    fn test_missing_template_fails() {
        let fixture = create_fixture("{{REPLACEME:apis_summary}}");
        fs::remove_file(
            fixture
                .templates_dir
                .join(REFERENCE_SUBDIR)
                .join("apis/_index.md.template"),
        )
        .unwrap();

        let result = relocate(
            &fixture.input_dir,
            &fixture.content_dir,
            &fixture.templates_dir,
        );

        assert!(matches!(result, Err(PipelineError::Io { .. })));
    }
}
