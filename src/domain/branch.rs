use crate::error::{GenerateTagError, Result};

/// Matches a leading `v<major>.<minor>.<patch>-` version prefix
const VERSION_PREFIX_PATTERN: &str = r"^v\d+\.\d+\.\d+-";

/// A branch name of the shape `<type>/<version>-<feature>`
///
/// Only the first two `/`-delimited segments are kept; anything after the
/// second separator is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName<'a> {
    pub branch_type: &'a str,
    pub suffix: &'a str,
}

impl<'a> BranchName<'a> {
    /// Split a branch name into its type and suffix segments
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the name contains no `/` separator.
    pub fn parse(name: &'a str) -> Result<Self> {
        let mut parts = name.split('/');
        match (parts.next(), parts.next()) {
            (Some(branch_type), Some(suffix)) => Ok(BranchName {
                branch_type,
                suffix,
            }),
            _ => Err(GenerateTagError::invalid_format(name)),
        }
    }

    /// The suffix with any leading version prefix removed
    /// Example: "v0.6.0-attribute-mappings" -> "attribute-mappings"
    pub fn feature_name(&self) -> String {
        strip_version_prefix(self.suffix)
    }
}

/// Remove a single leading `v<digits>.<digits>.<digits>-` prefix, if present.
///
/// Input without the prefix is returned unchanged.
pub fn strip_version_prefix(suffix: &str) -> String {
    if let Ok(re) = regex::Regex::new(VERSION_PREFIX_PATTERN) {
        re.replace(suffix, "").into_owned()
    } else {
        suffix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_beta_branch() {
        let branch = BranchName::parse("beta/v0.6.0-attribute-mappings").unwrap();
        assert_eq!(branch.branch_type, "beta");
        assert_eq!(branch.suffix, "v0.6.0-attribute-mappings");
        assert_eq!(branch.feature_name(), "attribute-mappings");
    }

    #[test]
    fn test_parse_without_separator() {
        let err = BranchName::parse("invalidbranch").unwrap_err();
        assert_eq!(err, GenerateTagError::invalid_format("invalidbranch"));
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(BranchName::parse("").is_err());
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let branch = BranchName::parse("rc/v1.0.0-api/extra").unwrap();
        assert_eq!(branch.branch_type, "rc");
        assert_eq!(branch.suffix, "v1.0.0-api");
    }

    #[test]
    fn test_parse_accepts_empty_segments() {
        let branch = BranchName::parse("/").unwrap();
        assert_eq!(branch.branch_type, "");
        assert_eq!(branch.suffix, "");
        assert_eq!(branch.feature_name(), "");
    }

    #[test]
    fn test_parse_accepts_any_branch_type() {
        let branch = BranchName::parse("nightly/v2.0.0-thing").unwrap();
        assert_eq!(branch.branch_type, "nightly");
    }

    #[test]
    fn test_strip_multi_digit_components() {
        assert_eq!(strip_version_prefix("v10.20.300-big"), "big");
    }

    #[test]
    fn test_strip_without_prefix() {
        assert_eq!(strip_version_prefix("no-version-prefix"), "no-version-prefix");
    }

    #[test]
    fn test_strip_only_at_start() {
        assert_eq!(strip_version_prefix("fix-v1.2.3-later"), "fix-v1.2.3-later");
    }

    #[test]
    fn test_strip_requires_trailing_hyphen() {
        assert_eq!(strip_version_prefix("v1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_strip_requires_three_components() {
        assert_eq!(strip_version_prefix("v1.2-feature"), "v1.2-feature");
        assert_eq!(strip_version_prefix("1.2.3-feature"), "1.2.3-feature");
    }

    #[test]
    fn test_strip_removes_a_single_prefix() {
        assert_eq!(strip_version_prefix("v1.0.0-v2.0.0-x"), "v2.0.0-x");
    }

    #[test]
    fn test_strip_is_idempotent_on_stripped_names() {
        let once = strip_version_prefix("v0.6.0-attribute-mappings");
        assert_eq!(strip_version_prefix(&once), once);
    }

    #[test]
    fn test_strip_leaves_empty_feature() {
        assert_eq!(strip_version_prefix("v1.2.3-"), "");
    }
}
