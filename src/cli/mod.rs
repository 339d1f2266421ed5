//! Command-line surface shared between the binary and its tests

pub mod output;

pub use output::OutputFormat;
