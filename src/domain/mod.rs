//! Domain logic - pure tag derivation rules independent of any I/O

pub mod branch;
pub mod tag;

pub use branch::{strip_version_prefix, BranchName};
pub use tag::{generate_tag, TagResult};
