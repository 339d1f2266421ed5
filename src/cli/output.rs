//! Output selection for the `--format` option.

use clap::ValueEnum;

use crate::domain::TagResult;

/// Which part of a generated tag result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Print only the tag
    Tag,
    /// Print only the branch type
    Type,
    /// Print `tag|branch_type`
    #[default]
    Both,
}

impl OutputFormat {
    /// Render a tag result as the single output line for this format
    pub fn render(&self, result: &TagResult) -> String {
        match self {
            OutputFormat::Tag => result.tag.clone(),
            OutputFormat::Type => result.branch_type.clone(),
            OutputFormat::Both => format!("{}|{}", result.tag, result.branch_type),
        }
    }
}
