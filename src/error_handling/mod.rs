//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Error types are categorized into:
//! - **Errors**: Failures that prevent a document from producing a record
//! - **Warnings**: Schema violations worth surfacing (missing required fields)
//! - **Info**: Expected per-field misses (absent selectors, coercion misses)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, RequestError, WarningType};
