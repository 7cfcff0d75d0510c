//! `mask` CLI — encode, decode, and inspect URI field-projection masks.
//!
//! ## Usage
//!
//! ```sh
//! # Encode the JSON representation to the compact mask form (stdin → stdout)
//! echo '{"id":1,"secret":0}' | mask encode
//!
//! # Encode from file to file
//! mask encode -i projection.json -o projection.mask
//!
//! # Decode a compact mask to pretty-printed JSON
//! echo 'id,-secret,friends:(start:0,count:10,name)' | mask decode
//!
//! # Validate a mask and show a short summary
//! mask check -i projection.mask
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mask_core::{MaskNode, MaskValue};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "mask", version, about = "URI field-projection mask CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode the JSON mask representation to the compact mask form
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode a compact mask string to pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a mask and print a short summary (non-zero exit if malformed)
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Input is not valid JSON")?;
            let mask =
                mask_core::from_json(&value).context("JSON is not a mask representation")?;
            write_output(output.as_deref(), &mask_core::encode(&mask))?;
        }
        Commands::Decode { input, output } => {
            let raw = read_input(input.as_deref())?;
            let mask = mask_core::decode(raw.trim()).context("Failed to decode mask")?;
            let pretty = serde_json::to_string_pretty(&mask_core::to_json(&mask))?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Check { input } => {
            let raw = read_input(input.as_deref())?;
            let mask = mask_core::decode(raw.trim()).context("Failed to decode mask")?;
            println!("top-level fields: {}", mask.len());
            println!("total fields:     {}", total_fields(&mask));
            println!("max depth:        {}", max_depth(&mask));
        }
    }

    Ok(())
}

/// Count fields across the whole tree.
fn total_fields(node: &MaskNode) -> usize {
    node.len()
        + node
            .iter()
            .map(|(_, value)| match value {
                MaskValue::Nested(child) => total_fields(child),
                _ => 0,
            })
            .sum::<usize>()
}

/// Deepest chain of nested groups below this node.
fn max_depth(node: &MaskNode) -> usize {
    node.iter()
        .map(|(_, value)| match value {
            MaskValue::Nested(child) => 1 + max_depth(child),
            _ => 0,
        })
        .max()
        .unwrap_or(0)
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
