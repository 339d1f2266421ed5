//! User interface module - output formatting for CI consumption.

pub mod formatter;

pub use formatter::{display_error, display_result};
