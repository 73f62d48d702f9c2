//! `jot` CLI -- format, query, and validate JSON documents from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat a hand-written config (lenient input) as clean JSON
//! echo '{name: Ada, tags: [math, computing],}' | jot fmt
//!
//! # Compact output, file to file
//! jot fmt -i config.jot -o config.json --compact
//!
//! # Extract a sub-value with a path query
//! jot get '*/name' -i people.json
//!
//! # Validate strictly; non-zero exit and a byte offset on failure
//! jot check -i data.json --strict
//! ```

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jot_core::{DumpConfig, Value};

#[derive(Parser)]
#[command(
    name = "jot",
    version,
    about = "Order-preserving JSON formatter and query tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat a document (lenient input by default)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Accept only strict RFC-style JSON
        #[arg(long)]
        strict: bool,
        /// Emit the single-line compact form instead of indented output
        #[arg(long)]
        compact: bool,
        /// Escape every string byte >= 0x7F as a \u00XX sequence
        #[arg(long)]
        ascii: bool,
    },
    /// Extract a sub-value with a /-delimited path query
    Get {
        /// Query path, e.g. "servers/0/host" or "*/name"
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the single-line compact form instead of indented output
        #[arg(long)]
        compact: bool,
    },
    /// Validate a document and report the first syntax error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Accept only strict RFC-style JSON
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            strict,
            compact,
            ascii,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_doc(&text, strict)?;
            let mut config = if compact {
                DumpConfig::compact()
            } else {
                DumpConfig::pretty()
            };
            config.escape_high_bytes = ascii;
            // Formatted output may be persisted, so never truncate.
            config.truncate_long_strings = false;
            let mut rendered = value.dump_with(&config);
            rendered.push('\n');
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Get {
            path,
            input,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_doc(&text, false)?;
            let result = value.query(&path);
            let rendered = if compact {
                result.dump()
            } else {
                result.dump_with(&DumpConfig {
                    truncate_long_strings: false,
                    ..DumpConfig::pretty()
                })
            };
            println!("{rendered}");
        }
        Commands::Check { input, strict } => {
            let text = read_input(input.as_deref())?;
            match parse_doc(&text, strict) {
                Ok(_) => println!("OK"),
                Err(err) => {
                    eprintln!("{err:#}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn parse_doc(text: &str, strict: bool) -> Result<Value> {
    let parsed = if strict {
        jot_core::parse_strict(text)
    } else {
        jot_core::parse(text)
    };
    parsed.context("invalid JSON input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {path}"))?;
            log::debug!("read {} bytes from {path}", text.len());
            Ok(text)
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
                .with_context(|| format!("Failed to write file: {path}"))?;
            log::debug!("wrote {} bytes to {path}", content.len());
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
