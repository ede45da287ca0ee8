//! Batch orchestration over many documents.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use log::error;

use crate::error_handling::ErrorType;
use crate::models::{Document, ExtractionOutcome};
use crate::schema::ExtractionSchema;
use crate::utils::truncate_log_message;

use super::selectors::SelectorTable;
use super::Extractor;

impl Extractor {
    /// Extracts every document in the batch.
    ///
    /// The merged selector table is built once and shared read-only by all
    /// documents. Returns exactly one outcome per input document, in input
    /// order. Documents are extracted independently: a failure in one
    /// (including a panic caught at the document boundary) never affects
    /// another document's outcome or terminates the batch.
    ///
    /// # Arguments
    ///
    /// * `documents` - The pre-fetched documents, in batch order
    /// * `schema` - The target schema shared by the whole batch
    /// * `selector_overrides` - Caller rules merged over the defaults
    ///
    /// # Returns
    ///
    /// One [`ExtractionOutcome`] per document; an empty input yields an
    /// empty list.
    pub fn extract_all(
        &self,
        documents: &[Document],
        schema: &ExtractionSchema,
        selector_overrides: Option<&BTreeMap<String, String>>,
    ) -> Vec<ExtractionOutcome> {
        let table = SelectorTable::merged(&self.default_rules, selector_overrides, &self.stats);

        documents
            .iter()
            .map(|document| {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    self.extract_document(document, schema, &table)
                }));
                match result {
                    Ok(outcome) => outcome,
                    Err(payload) => {
                        error!(
                            "Error extracting content: {}",
                            truncate_log_message(&panic_message(payload.as_ref()))
                        );
                        self.stats.increment_error(ErrorType::ExtractionPanic);
                        ExtractionOutcome::Failed
                    }
                }
            })
            .collect()
    }
}

/// Best-effort message from a caught panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
