//! dotjson CLI - argument surface and verb dispatch.
//!
//! The binary is thin plumbing around `dotjson-core`: parse arguments, read
//! the whole document into memory, run exactly one verb against the tree,
//! and write the result back out. Path misses are silent no-ops; only
//! malformed JSON, bad arguments and I/O failures are fatal.

pub mod io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotjson_core::{ops, text, DotPath, JsonValue};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read and edit JSON documents addressed by dotted paths.
#[derive(Debug, Parser)]
#[command(name = "dotjson", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per editing verb.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value at a path
    Get {
        /// Dotted path to the target value
        #[arg(long)]
        key: String,
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print container values
        #[arg(long)]
        pretty: bool,
    },
    /// Overwrite the value at an existing path
    Replace {
        /// Dotted path to the target value
        #[arg(long)]
        key: String,
        /// New value, taken verbatim as a string
        #[arg(long)]
        txt_value: Option<String>,
        /// New value, parsed as JSON
        #[arg(long)]
        json_value: Option<String>,
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Set the value at a path, creating missing parent containers
    Add {
        /// Dotted path to the target value
        #[arg(long)]
        key: String,
        /// New value, taken verbatim as a string
        #[arg(long)]
        txt_value: Option<String>,
        /// New value, parsed as JSON
        #[arg(long)]
        json_value: Option<String>,
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete the element at a path
    Del {
        /// Dotted path to the target value
        #[arg(long)]
        key: String,
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Runs one verb to completion: read, resolve, mutate, write.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Get {
            key,
            input,
            output,
            pretty,
        } => {
            let root = load_document(input.as_deref())?;
            let path = DotPath::parse(&key);
            match ops::get(&root, &path) {
                Some(value) => {
                    io::write_output(&text::render_value(value, pretty), output.as_deref())?;
                }
                // Nothing resolved: no output at all, not even an empty file.
                None => debug!(%path, "path did not resolve, writing nothing"),
            }
        }
        Command::Replace {
            key,
            txt_value,
            json_value,
            input,
            output,
        } => {
            let mut root = load_document(input.as_deref())?;
            let path = DotPath::parse(&key);
            if let Some(value) = new_value(txt_value, json_value)? {
                let mutated = ops::replace(&mut root, &path, value);
                debug!(%path, mutated, "replace");
            }
            io::write_output(&text::render_document(&root), output.as_deref())?;
        }
        Command::Add {
            key,
            txt_value,
            json_value,
            input,
            output,
        } => {
            let mut root = load_document(input.as_deref())?;
            let path = DotPath::parse(&key);
            if let Some(value) = new_value(txt_value, json_value)? {
                let added = ops::add(&mut root, &path, value);
                debug!(%path, added, "add");
            }
            io::write_output(&text::render_document(&root), output.as_deref())?;
        }
        Command::Del { key, input, output } => {
            let mut root = load_document(input.as_deref())?;
            let path = DotPath::parse(&key);
            let removed = ops::del(&mut root, &path);
            debug!(%path, removed, "del");
            io::write_output(&text::render_document(&root), output.as_deref())?;
        }
    }
    Ok(())
}

fn load_document(input: Option<&Path>) -> Result<JsonValue> {
    let doc_text = io::read_input(input)?;
    text::parse(&doc_text).context("input is not valid JSON")
}

/// Materializes the value flags for replace/add. `--txt-value` wins when
/// both are given. Neither flag means there is nothing to write; the verb
/// is skipped and the document is re-serialized as-is.
fn new_value(txt: Option<String>, json: Option<String>) -> Result<Option<JsonValue>> {
    match (txt, json) {
        (Some(s), _) => Ok(Some(JsonValue::from(s))),
        (None, Some(j)) => Ok(Some(
            text::parse(&j).context("--json-value is not valid JSON")?,
        )),
        (None, None) => Ok(None),
    }
}
