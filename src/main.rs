//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `web_extract` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use web_extract::initialization::init_logger_with;
use web_extract::{run_extraction, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the extraction using the library
    match run_extraction(config) {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Processed {} document{} ({} extracted, {} failed) in {:.1}s",
                report.total_documents,
                if report.total_documents == 1 { "" } else { "s" },
                report.extracted,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(output) = &report.output {
                println!("Results saved in {}", output.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("web_extract error: {:#}", e);
            process::exit(1);
        }
    }
}
