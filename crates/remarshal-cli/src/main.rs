//! `remarshal` CLI — convert a document between TOML, YAML, and JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Convert TOML to JSON (stdin → stdout)
//! remarshal --from TOML --to JSON < Cargo.toml
//!
//! # Convert from file to file
//! remarshal --from YAML --to TOML -i config.yaml -o config.toml
//! ```
//!
//! Format names are exact and case-sensitive: `TOML`, `YAML`, `JSON`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(
    name = "remarshal",
    version,
    about = "Convert a document between TOML, YAML, and JSON"
)]
struct Cli {
    /// Input format (one of: TOML, YAML, JSON)
    #[arg(short = 'f', long = "from", value_name = "FORMAT")]
    from: String,

    /// Output format (one of: TOML, YAML, JSON)
    #[arg(short = 't', long = "to", value_name = "FORMAT")]
    to: String,

    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = read_input(cli.input.as_deref())?;
    let converted = remarshal_core::convert(&input, &cli.from, &cli.to)
        .with_context(|| format!("Failed to convert {} to {}", cli.from, cli.to))?;

    write_output(cli.output.as_deref(), &converted)
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Write the converted document, ensuring it ends with a newline.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    match path {
        Some(path) => std::fs::write(path, &content)
            .with_context(|| format!("Failed to write file: {}", path)),
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")
        }
    }
}
