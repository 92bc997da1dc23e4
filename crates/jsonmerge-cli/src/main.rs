//! `jsonmerge` CLI — deep-merge JSON files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Merge two files, compact output on stdout
//! jsonmerge base.json override.json
//!
//! # Pretty-print with the default indent width of 4 spaces
//! jsonmerge -i base.json override.json
//!
//! # Pretty-print with a 2-space indent
//! jsonmerge --indent 2 base.json override.json
//!
//! # Write the merged document to a file
//! jsonmerge base.json override.json -o merged.json
//! ```
//!
//! Files are merged left to right: later files win every scalar or kind
//! conflict, object keys accumulate, arrays concatenate.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Indent width used by bare `-i`, and the fallback when `--indent` is
/// given something that does not parse as a width.
const DEFAULT_INDENT: usize = 4;

#[derive(Parser)]
#[command(
    name = "jsonmerge",
    version,
    about = "Deep-merge two or more JSON documents"
)]
struct Cli {
    /// Input JSON files, merged in order (later files win conflicts)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Indent output with the default width of 4 spaces
    #[arg(short = 'i')]
    indent: bool,

    /// Indent output with the given number of spaces
    #[arg(long = "indent", value_name = "N")]
    indent_width: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut docs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let doc: Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
        docs.push(doc);
    }

    let merged = jsonmerge_core::merge_all(&docs).context("Failed to merge documents")?;

    let indent = resolve_indent(cli.indent, cli.indent_width.as_deref());
    let rendered = render(&merged, indent)?;
    write_output(cli.output.as_deref(), &rendered)
}

/// Resolve the two indent flags into an output width.
///
/// `-i` alone selects the default width; `--indent N` selects N and takes
/// precedence when both are given. A value that does not parse as a width
/// falls back to the default rather than failing — the flags only shape
/// presentation, never the merge result.
fn resolve_indent(flag: bool, width: Option<&str>) -> Option<usize> {
    match (flag, width) {
        (false, None) => None,
        (_, Some(raw)) => Some(raw.trim().parse().unwrap_or(DEFAULT_INDENT)),
        (true, None) => Some(DEFAULT_INDENT),
    }
}

/// Serialize the merged document: compact single-line JSON when `indent`
/// is `None`, pretty-printed with an N-space indent unit otherwise.
fn render(value: &Value, indent: Option<usize>) -> Result<String> {
    match indent {
        None => Ok(serde_json::to_string(value)?),
        Some(width) => {
            let unit = vec![b' '; width];
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(&unit);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value
                .serialize(&mut ser)
                .context("Failed to serialize merged document")?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
