use thiserror::Error;

/// Unified error type for tag generation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateTagError {
    #[error("Invalid branch name format: {0}")]
    InvalidFormat(String),
}

/// Convenience type alias for Results in generate-tag
pub type Result<T> = std::result::Result<T, GenerateTagError>;

impl GenerateTagError {
    /// Create an invalid format error for the offending branch name
    pub fn invalid_format(branch_name: impl Into<String>) -> Self {
        GenerateTagError::InvalidFormat(branch_name.into())
    }
}
