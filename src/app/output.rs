//! Result output: console and file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use colored::*;

/// Prints the discovered paths to stdout, one per line, after a header.
///
/// Only the header is colored so the list can be copied or piped as-is.
pub fn print_results(paths: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // A closed pipe (e.g. `| head`) is not worth failing the run over
    let _ = write_results(&mut out, paths, true);
}

/// Appends the discovered paths to `path`, one per line, creating the file if needed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or written.
pub fn append_results(path: &Path, paths: &[String]) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = io::BufWriter::new(file);
    write_results(&mut writer, paths, false)?;
    writer.flush()
}

fn write_results<W: Write>(out: &mut W, paths: &[String], header: bool) -> io::Result<()> {
    if header {
        writeln!(
            out,
            "\n{}",
            format!("Discovered {} path(s):", paths.len()).bold().white()
        )?;
    }
    for path in paths {
        writeln!(out, "{path}")?;
    }
    Ok(())
}
