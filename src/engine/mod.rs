//! The extraction engine.
//!
//! This module maps a raw HTML document plus a target schema plus a selector
//! rule table into a validated structured record (or a documented failure).
//! Control flow: batch orchestration ([`batch`]) over per-document
//! extraction, which resolves selectors ([`selectors`]) and coerces each
//! field ([`coerce`]).

mod batch;
pub(crate) mod coerce;
pub(crate) mod selectors;

use std::collections::BTreeMap;
use std::sync::Arc;

use log::warn;
use scraper::Html;

use crate::config::DEFAULT_SELECTOR_RULES;
use crate::error_handling::{InfoType, ProcessingStats, WarningType};
use crate::models::{Document, ExtractedRecord, ExtractionOutcome};
use crate::schema::ExtractionSchema;
use self::selectors::SelectorTable;

/// The document extraction engine.
///
/// An `Extractor` owns its default selector rules (an explicit configuration
/// object, substitutable for testing) and a statistics tracker. It holds no
/// per-request state: schema and merged selector table are constructed per
/// call and discarded, so the same extractor can serve any number of
/// requests, and documents may be processed in parallel by the caller with
/// no synchronization beyond read-only sharing.
pub struct Extractor {
    default_rules: BTreeMap<String, String>,
    stats: Arc<ProcessingStats>,
}

impl Extractor {
    /// Creates an extractor with the built-in default selector rules.
    pub fn new() -> Self {
        let default_rules = DEFAULT_SELECTOR_RULES
            .iter()
            .map(|(field, rule)| (field.to_string(), rule.to_string()))
            .collect();
        Extractor {
            default_rules,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Creates an extractor with a substituted default rule table.
    ///
    /// Caller overrides at extraction time still merge over these defaults
    /// field-by-field.
    pub fn with_default_rules(default_rules: BTreeMap<String, String>) -> Self {
        Extractor {
            default_rules,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// The extractor's statistics tracker.
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }

    /// Extracts one document against a resolved selector table.
    ///
    /// Every schema property is attempted independently: resolve the field's
    /// selector, locate the first matching element in document order, and
    /// coerce it by the field's kind. Fields that resolve to nothing are
    /// omitted; they never abort the rest of the document. After all fields
    /// are processed the required-field gate runs: any required field absent
    /// from the record fails the whole document (logged, no partial record).
    fn extract_document(
        &self,
        document: &Document,
        schema: &ExtractionSchema,
        table: &SelectorTable,
    ) -> ExtractionOutcome {
        let html = Html::parse_document(&document.html);

        let mut fields = BTreeMap::new();
        for (field_name, descriptor) in &schema.properties {
            let Some(selector) = table.resolve(field_name) else {
                self.stats.increment_info(InfoType::FieldAbsent);
                continue;
            };
            let Some(element) = html.select(selector).next() else {
                self.stats.increment_info(InfoType::FieldAbsent);
                continue;
            };

            let kind = descriptor.kind_for(field_name);
            match coerce::coerce(element, kind, document.base_url(), &self.stats) {
                coerce::FieldOutcome::Extracted(value) => {
                    fields.insert(field_name.clone(), value);
                }
                coerce::FieldOutcome::Absent => {}
            }
        }

        let missing_fields: Vec<&str> = schema
            .required
            .iter()
            .filter(|field| !fields.contains_key(field.as_str()))
            .map(String::as_str)
            .collect();
        if !missing_fields.is_empty() {
            warn!("Missing required fields: {:?}", missing_fields);
            self.stats
                .increment_warning(WarningType::MissingRequiredFields);
            return ExtractionOutcome::Failed;
        }

        ExtractionOutcome::Extracted(ExtractedRecord {
            fields,
            features: document.features.clone(),
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
