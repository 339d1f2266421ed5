//! Pure formatting functions for CLI output.
//!
//! Output is consumed by CI scripts, so lines are written without colour
//! codes or decoration beyond the `Error:` prefix on failures.

use std::io::{self, Write};

/// Write the selected result line followed by a newline.
pub fn write_result<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)
}

/// Write an error message prefixed with `Error:`.
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "Error: {}", message)
}

/// Print the selected result line to stdout.
pub fn display_result(line: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, line)?;
    handle.flush()
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    // stderr write failures are ignored
    let _ = write_error(&mut io::stderr().lock(), message);
}
