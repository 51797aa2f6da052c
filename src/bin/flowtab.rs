//! Flowtab CLI — flatten YAML data-flow manifests into CSV tables.
//!
//! Usage:
//!   flowtab <input-dir> <output-dir> [--manifest graph-original.yml] [--verbose]

use clap::Parser;
use flowtab::{process_directory, DEFAULT_MANIFEST};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flowtab",
    version,
    about = "Flatten YAML data-flow graphs into per-path CSV tables"
)]
struct Cli {
    /// Directory containing one subdirectory per application
    input: PathBuf,

    /// Directory to write one CSV per application into
    output: PathBuf,

    /// Manifest file name to look for in each application directory
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: String,

    /// Enable debug-level logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if !cli.input.is_dir() {
        eprintln!("Error: input '{}' is not a directory", cli.input.display());
        std::process::exit(1);
    }

    match process_directory(&cli.input, &cli.output, &cli.manifest) {
        Ok(summary) => {
            println!(
                "{} written, {} empty, {} failed",
                summary.written, summary.empty, summary.failed
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
