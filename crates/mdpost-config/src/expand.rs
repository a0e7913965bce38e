//! Environment variable and tilde expansion for configuration values.

use crate::ConfigError;

/// Expand `~` and `${VAR}` references in a configuration path value.
///
/// An unset variable (or a missing home directory for `~`) is a
/// configuration error naming the field it occurred in.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_passes_through() {
        let expanded = expand_path("sdk/docs", "paths.input_dir").unwrap();
        assert_eq!(expanded, "sdk/docs");
    }

    #[test]
    fn test_unset_variable_is_an_error() {
        let result = expand_path("${MDPOST_UNSET_TEST_VAR}/docs", "paths.input_dir");

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "paths.input_dir"));
        assert!(err.to_string().contains("MDPOST_UNSET_TEST_VAR"));
    }

    #[test]
    fn test_set_variable_expands() {
        // PATH is set in any test environment.
        let expanded = expand_path("${PATH}", "paths.site_root").unwrap();
        assert!(!expanded.contains("${"));
    }
}
