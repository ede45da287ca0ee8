//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for errors,
//! warnings, and informational metrics during document extraction.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Thread-safe processing statistics tracker.
///
/// Tracks errors, warnings, and informational metrics using atomic counters,
/// allowing concurrent access when a caller parallelizes the batch loop. All
/// types are initialized to zero on creation.
///
/// # Categories
///
/// - **Errors**: Failures that degrade a document to a failure marker
/// - **Warnings**: Required-field violations
/// - **Info**: Expected per-field misses
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across threads using `Arc`.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every counter initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }

        let mut info = HashMap::new();
        for info_type in InfoType::iter() {
            info.insert(info_type, AtomicUsize::new(0));
        }

        ProcessingStats {
            errors,
            warnings,
            info,
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }

    /// Logs a summary of all non-zero counters.
    ///
    /// Used at the end of a run to surface what was counted.
    pub fn log_summary(&self) {
        let total_errors = self.total_errors();
        let total_warnings = self.total_warnings();
        let total_info = self.total_info();

        if total_errors > 0 {
            info!("Error Counts ({} total):", total_errors);
            for error_type in ErrorType::iter() {
                let count = self.get_error_count(error_type);
                if count > 0 {
                    info!("   {}: {}", error_type.as_str(), count);
                }
            }
        }

        if total_warnings > 0 {
            info!("Warning Counts ({} total):", total_warnings);
            for warning_type in WarningType::iter() {
                let count = self.get_warning_count(warning_type);
                if count > 0 {
                    info!("   {}: {}", warning_type.as_str(), count);
                }
            }
        }

        if total_info > 0 {
            info!("Info Counts ({} total):", total_info);
            for info_type in InfoType::iter() {
                let count = self.get_info_count(info_type);
                if count > 0 {
                    info!("   {}: {}", info_type.as_str(), count);
                }
            }
        }
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_increments() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ExtractionPanic);
        stats.increment_error(ErrorType::ExtractionPanic);
        stats.increment_error(ErrorType::ExtractionPanic);
        assert_eq!(stats.get_error_count(ErrorType::ExtractionPanic), 3);
    }

    #[test]
    fn test_log_summary_does_not_panic() {
        // Empty tracker
        let stats = ProcessingStats::new();
        stats.log_summary();

        // Populated tracker
        stats.increment_error(ErrorType::InvalidSelector);
        stats.increment_warning(WarningType::MissingRequiredFields);
        stats.increment_info(InfoType::FieldAbsent);
        stats.increment_info(InfoType::CoercionMiss);
        stats.log_summary();
    }
}
