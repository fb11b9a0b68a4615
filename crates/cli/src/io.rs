//! File-or-stream I/O for the CLI.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the whole input document from `path`, or from stdin until EOF when
/// no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Writes `content` to `path`, or to stdout followed by a newline when no
/// path is given. File output is the exact rendered text.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).with_context(|| format!("writing {}", p.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content).context("writing stdout")
        }
    }
}
