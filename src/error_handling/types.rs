//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout
//! the application.

use log::SetLoggerError;
use strum_macros::EnumIter;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for loading an extraction request file.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request file could not be read.
    #[error("Failed to read request file {path}: {source}")]
    Read {
        /// Path that failed to open or read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The request file is not valid request JSON.
    #[error("Request file is not valid extraction request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Types of errors that can occur during document extraction.
///
/// This enum categorizes actual error conditions - failures that degrade a
/// document's outcome to a failure marker or indicate a bad configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ErrorType {
    /// A panic was caught at the document extraction boundary.
    ExtractionPanic,
    /// A caller-supplied selector string failed to parse.
    InvalidSelector,
}

/// Types of warnings that can occur during document extraction.
///
/// Warnings indicate schema violations that fail a document without being
/// process-level errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum WarningType {
    /// One or more required fields could not be populated; the document's
    /// outcome is a failure marker.
    MissingRequiredFields,
}

/// Types of informational metrics tracked during document extraction.
///
/// Info metrics count expected per-field misses; they never fail a document
/// on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum InfoType {
    /// A field had no selector rule or its selector matched no element.
    FieldAbsent,
    /// A matched element's text could not be coerced (unparsable price or
    /// date, empty specification map).
    CoercionMiss,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ExtractionPanic => "Extraction panic",
            ErrorType::InvalidSelector => "Invalid selector",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingRequiredFields => "Missing required fields",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::FieldAbsent => "Field absent",
            InfoType::CoercionMiss => "Coercion miss",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(ErrorType::ExtractionPanic.as_str(), "Extraction panic");
        assert_eq!(ErrorType::InvalidSelector.as_str(), "Invalid selector");
    }

    #[test]
    fn test_warning_type_as_str() {
        assert_eq!(
            WarningType::MissingRequiredFields.as_str(),
            "Missing required fields"
        );
    }

    #[test]
    fn test_info_type_as_str() {
        assert_eq!(InfoType::FieldAbsent.as_str(), "Field absent");
        assert_eq!(InfoType::CoercionMiss.as_str(), "Coercion miss");
    }

    #[test]
    fn test_all_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(!error_type.as_str().is_empty());
        }
        for warning_type in WarningType::iter() {
            assert!(!warning_type.as_str().is_empty());
        }
        for info_type in InfoType::iter() {
            assert!(!info_type.as_str().is_empty());
        }
    }

    #[test]
    fn test_request_error_display() {
        let err = RequestError::Read {
            path: "missing.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("missing.json"));
    }
}
