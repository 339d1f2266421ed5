use crate::domain::branch::BranchName;
use crate::error::Result;

/// A generated release tag together with the branch type it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResult {
    pub tag: String,
    pub branch_type: String,
}

impl TagResult {
    /// Create a new tag result
    pub fn new(tag: impl Into<String>, branch_type: impl Into<String>) -> Self {
        TagResult {
            tag: tag.into(),
            branch_type: branch_type.into(),
        }
    }
}

/// Generates a clean tag from a beta/rc/preview branch name.
///
/// The version embedded in the branch name is dropped so the tag does not
/// repeat it; `base_version` is used verbatim as the tag prefix.
///
/// # Arguments
/// * `branch_name` - Branch name like `beta/v0.6.0-attribute-mappings`
/// * `base_version` - Base version like `v0.6.0`
///
/// # Returns
/// * `Ok(TagResult)` - e.g. tag `v0.6.0-beta-attribute-mappings`, type `beta`
/// * `Err(InvalidFormat)` - If the branch name contains no `/`
///
/// # Example
/// ```
/// use generate_tag::generate_tag;
///
/// let result = generate_tag("rc/v1.2.3-hotfix", "v1.2.3").unwrap();
/// assert_eq!(result.tag, "v1.2.3-rc-hotfix");
/// assert_eq!(result.branch_type, "rc");
/// ```
pub fn generate_tag(branch_name: &str, base_version: &str) -> Result<TagResult> {
    let branch = BranchName::parse(branch_name)?;
    let feature_name = branch.feature_name();

    let tag = format!("{}-{}-{}", base_version, branch.branch_type, feature_name);

    Ok(TagResult::new(tag, branch.branch_type))
}
