//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Doubles as the CLI argument definition and the library configuration for
/// [`crate::run_extraction`]. It can be constructed programmatically without
/// going through argument parsing.
///
/// # Examples
///
/// ```no_run
/// use web_extract::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     request: PathBuf::from("request.json"),
///     files: vec![PathBuf::from("page.html")],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "web_extract",
    about = "Extract structured content from HTML documents using CSS selector rules"
)]
pub struct Config {
    /// Path to the extraction request JSON (target schema, optional selector
    /// rules, optional document manifest)
    pub request: PathBuf,

    /// HTML files to extract from, in batch order (in addition to any
    /// documents listed in the request file)
    pub files: Vec<PathBuf>,

    /// Write JSONL output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request: PathBuf::from("request.json"),
            files: Vec::new(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
