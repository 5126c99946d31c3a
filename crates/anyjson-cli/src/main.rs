//! `anyjson` CLI: query, edit and merge JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value at a dotted path (stdin → stdout)
//! echo '{"list":["x","y"]}' | anyjson get list.1
//!
//! # Set a value and write the result to a file
//! anyjson set service.port 9090 -i config.json -o config.json
//!
//! # Remove a member
//! anyjson delete debug -i config.json
//!
//! # Right-biased merge of two documents, nulls stripped
//! anyjson --compact merge base.json override.json
//!
//! # Re-serialize with indentation
//! anyjson --pretty fmt -i data.json
//! ```
//!
//! Navigation problems (index out of range, wrong node kind) are reported on
//! stderr as warnings and never abort the command. Set `RUST_LOG` to change
//! the filter, or pass `--quiet` to silence them.

use anyhow::{Context, Result};
use anyjson::{PathKey, SerializeMode, Value};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anyjson",
    version,
    about = "Query, edit and merge JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strip null members and elements from the output
    #[arg(long, global = true)]
    compact: bool,

    /// Indent the output
    #[arg(long, global = true)]
    pretty: bool,

    /// Do not report navigation warnings on stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a dotted path (e.g. `list.1.name`)
    Get {
        /// Dotted path; integer segments address array elements
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Set the value at a dotted path
    Set {
        /// Dotted path; integer segments address array elements
        path: String,
        /// New value, as JSON text (`42`, `"text"`, `{"a":1}`)
        #[arg(allow_hyphen_values = true)]
        json: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Remove the object member at a dotted path
    Delete {
        /// Dotted path; the last segment names the member to remove
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Merge OTHER into BASE: objects merge by key, arrays concatenate,
    /// anything else is replaced by OTHER
    Merge {
        /// Base document
        base: String,
        /// Document whose values win
        other: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse and re-serialize a document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let mode = if cli.compact {
        SerializeMode::Compact
    } else {
        SerializeMode::Raw
    };

    match cli.command {
        Commands::Get { path, input } => {
            let doc = read_document(input.as_deref())?;
            let found = doc.get_path(&parse_path(&path)?);
            write_output(None, &render(found, mode, cli.pretty)?)?;
        }
        Commands::Set {
            path,
            json,
            input,
            output,
        } => {
            let keys = parse_path(&path)?;
            let value =
                Value::parse(&json).with_context(|| format!("Invalid JSON value: {}", json))?;
            let mut doc = read_document(input.as_deref())?;
            doc.set_path(&keys, value);
            write_output(output.as_deref(), &render(&doc, mode, cli.pretty)?)?;
        }
        Commands::Delete {
            path,
            input,
            output,
        } => {
            let keys = parse_path(&path)?;
            let mut doc = read_document(input.as_deref())?;
            doc.delete_path(&keys);
            write_output(output.as_deref(), &render(&doc, mode, cli.pretty)?)?;
        }
        Commands::Merge {
            base,
            other,
            output,
        } => {
            let mut doc = read_document(Some(base.as_str()))?;
            doc.merge(read_document(Some(other.as_str()))?);
            write_output(output.as_deref(), &render(&doc, mode, cli.pretty)?)?;
        }
        Commands::Fmt { input, output } => {
            let doc = read_document(input.as_deref())?;
            write_output(output.as_deref(), &render(&doc, mode, cli.pretty)?)?;
        }
    }

    Ok(())
}

/// Diagnostics go to stderr. `RUST_LOG` overrides the default `warn` filter.
fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn parse_path(path: &str) -> Result<Vec<PathKey>> {
    let keys = PathKey::parse_dotted(path);
    if keys.is_empty() {
        anyhow::bail!("Path must not be empty");
    }
    Ok(keys)
}

/// Serialize with a trailing newline.
fn render(value: &Value, mode: SerializeMode, pretty: bool) -> Result<String> {
    let text = if pretty {
        value.serialize_pretty(mode)
    } else {
        value.serialize_string(mode)
    };
    let text = text.context("Value holds a NaN or infinite number and cannot be written as JSON")?;
    Ok(format!("{}\n", text))
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    tracing::debug!(source = path.unwrap_or("stdin"), bytes = text.len(), "read document");
    Value::parse(&text)
        .with_context(|| format!("Failed to parse JSON from {}", path.unwrap_or("stdin")))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
