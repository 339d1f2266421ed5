pub mod cli;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{generate_tag, TagResult};
pub use error::{GenerateTagError, Result};
