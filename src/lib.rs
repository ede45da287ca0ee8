//! web_extract library: structured content extraction from HTML documents
//!
//! This library maps raw HTML documents plus a target schema plus a CSS
//! selector rule table into validated structured records. Documents are
//! supplied pre-fetched; the engine performs no network I/O, holds no state
//! across calls, and never fails a whole batch because of one document.
//!
//! # Example
//!
//! ```
//! use web_extract::{Document, ExtractionSchema, Extractor, FieldDescriptor};
//! use std::collections::BTreeMap;
//!
//! let schema = ExtractionSchema {
//!     schema_type: "object".to_string(),
//!     properties: BTreeMap::from([
//!         ("title".to_string(), FieldDescriptor::default()),
//!         ("price".to_string(), FieldDescriptor::default()),
//!     ]),
//!     required: vec!["title".to_string()],
//! };
//!
//! let documents = vec![Document::with_url(
//!     "<h1>Widget</h1><span class=\"price\">$19.99</span>",
//!     "http://example.com/widget",
//! )];
//!
//! let extractor = Extractor::new();
//! let outcomes = extractor.extract_all(&documents, &schema, None);
//! assert_eq!(outcomes.len(), 1);
//! assert!(!outcomes[0].is_failed());
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error_handling;
mod export;
pub mod initialization;
mod models;
mod schema;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, DEFAULT_SELECTOR_RULES};
pub use engine::Extractor;
pub use error_handling::{
    ErrorType, InfoType, InitializationError, ProcessingStats, RequestError, WarningType,
};
pub use export::{export_jsonl, write_outcomes};
pub use models::{Document, ExtractedRecord, ExtractionOutcome, FieldValue, ImageRef};
pub use run::{run_extraction, ExtractionReport};
pub use schema::{
    input_params_schema, DocumentSource, ExtractionSchema, FieldDescriptor, FieldKind, InputParams,
};

// Internal run module (contains the CLI-facing extraction flow)
mod run {
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use url::Url;

    use crate::config::Config;
    use crate::engine::Extractor;
    use crate::error_handling::RequestError;
    use crate::models::Document;
    use crate::schema::InputParams;

    /// Results of an extraction run.
    ///
    /// Contains summary statistics about the completed run.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// Total number of documents processed
        pub total_documents: usize,
        /// Number of documents that produced a record
        pub extracted: usize,
        /// Number of documents that degraded to a failure marker
        pub failed: usize,
        /// Elapsed extraction time in seconds
        pub elapsed_seconds: f64,
        /// Output path the JSONL was written to, if not stdout
        pub output: Option<PathBuf>,
    }

    /// Runs an extraction with the provided configuration.
    ///
    /// This is the main entry point for the CLI. It loads the request file,
    /// reads the HTML documents it names (plus any passed on the command
    /// line), runs the batch through the engine, and writes one JSONL line
    /// per document.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (request path, document files, output)
    ///
    /// # Returns
    ///
    /// Returns an `ExtractionReport` with summary statistics, or an error if
    /// the run could not start.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The request file cannot be read or is not valid request JSON
    /// - An HTML document file cannot be read
    /// - The output file cannot be created
    ///
    /// Per-document extraction failures are not errors: they surface as
    /// failure markers in the output and in the report counts.
    pub fn run_extraction(config: Config) -> Result<ExtractionReport> {
        let params = load_request(&config.request)?;
        let documents = load_documents(&config, &params)?;
        info!(
            "Loaded {} document{} for extraction",
            documents.len(),
            if documents.len() == 1 { "" } else { "s" }
        );

        let extractor = Extractor::new();
        let start = Instant::now();
        let outcomes =
            extractor.extract_all(&documents, &params.schema, params.selector_rules.as_ref());
        let elapsed_seconds = start.elapsed().as_secs_f64();

        crate::export::export_jsonl(&outcomes, config.output.as_deref())
            .context("Failed to write extraction output")?;

        extractor.stats().log_summary();

        let failed = outcomes.iter().filter(|outcome| outcome.is_failed()).count();
        Ok(ExtractionReport {
            total_documents: outcomes.len(),
            extracted: outcomes.len() - failed,
            failed,
            elapsed_seconds,
            output: config.output.clone(),
        })
    }

    /// Loads and parses the extraction request file.
    fn load_request(path: &Path) -> Result<InputParams, RequestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RequestError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let params = serde_json::from_str(&raw)?;
        Ok(params)
    }

    /// Reads every HTML document named by the request manifest and the
    /// command line, in that order.
    fn load_documents(config: &Config, params: &InputParams) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for source in &params.documents {
            documents.push(load_document(&source.path, source.url.as_deref())?);
        }
        for path in &config.files {
            documents.push(load_document(path, None)?);
        }
        Ok(documents)
    }

    /// Reads one HTML file into a document.
    ///
    /// Without an explicit URL the document's `url` feature falls back to
    /// the file's own `file://` URL so relative image sources still resolve.
    fn load_document(path: &Path, url_override: Option<&str>) -> Result<Document> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read HTML document: {}", path.display()))?;
        let url = match url_override {
            Some(url) => url.to_string(),
            None => file_url(path),
        };
        if url.is_empty() {
            Ok(Document::new(html))
        } else {
            Ok(Document::with_url(html, url))
        }
    }

    /// The `file://` URL of a local path, or empty if it cannot be resolved.
    fn file_url(path: &Path) -> String {
        std::fs::canonicalize(path)
            .ok()
            .and_then(|absolute| Url::from_file_path(absolute).ok())
            .map(|url| url.to_string())
            .unwrap_or_default()
    }
}
