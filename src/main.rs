/*!
# bomstrip CLI

Command-line interface for detecting and removing Byte Order Marks (BOMs)
from text-based files.
*/

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{ArgGroup, Parser};

use bomstrip::cli_common;
use bomstrip::core::{process_file, walk_directory, BomEncoding};

#[derive(Parser)]
#[command(
    name = "bomstrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detects and removes Byte Order Marks (BOMs) from text-based files",
    group(ArgGroup::new("target").required(true).args(["file", "directory"]))
)]
struct Cli {
    /// Path to a single file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a directory to process
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Encoding to use (utf-8, utf-16le, utf-16be)
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,

    /// Recursively process subdirectories (only valid with --directory)
    #[arg(short, long)]
    recursive: bool,

    /// Enable verbose logging (DEBUG level)
    #[arg(short, long)]
    verbose: bool,

    /// Exit with a nonzero code if any file or directory failed
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli_common::init_logging(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose logging enabled");
    }

    // Validated before anything is touched; a bad identifier is invariant
    // across the whole run, unlike a per-file I/O failure.
    let encoding = match BomEncoding::from_str(&cli.encoding) {
        Ok(encoding) => encoding,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };

    if let Some(file) = cli.file {
        if !file.is_file() {
            tracing::error!("File not found: {}", file.display());
            std::process::exit(1);
        }
        if let Err(err) = process_file(&file, encoding) {
            tracing::error!("Error processing {}: {}", file.display(), err);
            if cli.strict {
                std::process::exit(1);
            }
        }
    } else if let Some(directory) = cli.directory {
        if !directory.is_dir() {
            tracing::error!("Directory not found: {}", directory.display());
            std::process::exit(1);
        }
        let summary = walk_directory(&directory, encoding, cli.recursive);
        cli_common::print_summary(&summary);
        if cli.strict && summary.failures > 0 {
            std::process::exit(1);
        }
    }

    Ok(())
}
