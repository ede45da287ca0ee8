//! Selector rule resolution.
//!
//! A [`SelectorTable`] maps output field names to compiled CSS selectors. It
//! is built once per extraction request by overlaying caller-supplied rules
//! onto the engine's defaults, and shared read-only across every document in
//! the batch.

use std::collections::BTreeMap;

use scraper::Selector;

use crate::error_handling::ProcessingStats;
use crate::utils::parse_selector_with_fallback;

/// Compiled selector rules for one extraction request.
///
/// Caller rules take precedence field-by-field: an override adds or replaces
/// an entry but never removes a default. The table is immutable once built.
pub struct SelectorTable {
    rules: BTreeMap<String, Selector>,
}

impl SelectorTable {
    /// Builds the merged table from default rules and optional overrides.
    ///
    /// Rules that fail to parse are compiled to a never-matching fallback
    /// (logged and counted), so one bad override cannot take down the
    /// request; the affected field simply resolves to nothing.
    ///
    /// # Arguments
    ///
    /// * `defaults` - The engine's default rule strings
    /// * `overrides` - Caller-supplied partial rule table, if any
    /// * `stats` - Processing statistics tracker
    pub fn merged(
        defaults: &BTreeMap<String, String>,
        overrides: Option<&BTreeMap<String, String>>,
        stats: &ProcessingStats,
    ) -> Self {
        let mut merged: BTreeMap<&str, &str> = defaults
            .iter()
            .map(|(field, rule)| (field.as_str(), rule.as_str()))
            .collect();
        if let Some(overrides) = overrides {
            for (field, rule) in overrides {
                merged.insert(field.as_str(), rule.as_str());
            }
        }

        let rules = merged
            .into_iter()
            .map(|(field, rule)| {
                let selector = parse_selector_with_fallback(rule, field, stats);
                (field.to_string(), selector)
            })
            .collect();

        SelectorTable { rules }
    }

    /// Resolves a field name to its compiled selector.
    ///
    /// A missing entry means the field is not extractable; that is a
    /// legitimate null result, not an error.
    pub fn resolve(&self, field_name: &str) -> Option<&Selector> {
        self.rules.get(field_name)
    }

    /// Number of entries in the table.
    #[allow(dead_code)] // Used in tests
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no entries.
    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn rules(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_override_replaces_default() {
        let stats = ProcessingStats::new();
        let defaults = rules(&[("title", "h1")]);
        let overrides = rules(&[("title", ".custom-title")]);
        let table = SelectorTable::merged(&defaults, Some(&overrides), &stats);

        let html = Html::parse_document(
            r#"<h1>Default</h1><div class="custom-title">Override</div>"#,
        );
        let selector = table.resolve("title").expect("title rule should exist");
        let matched = html.select(selector).next().expect("should match");
        assert_eq!(matched.text().collect::<String>(), "Override");
    }

    #[test]
    fn test_unoverridden_fields_retain_defaults() {
        let stats = ProcessingStats::new();
        let defaults = rules(&[("title", "h1"), ("author", ".byline")]);
        let overrides = rules(&[("title", ".custom-title")]);
        let table = SelectorTable::merged(&defaults, Some(&overrides), &stats);

        assert_eq!(table.len(), 2);
        let html = Html::parse_document(r#"<span class="byline">Jo</span>"#);
        let selector = table.resolve("author").expect("author rule should exist");
        assert!(html.select(selector).next().is_some());
    }

    #[test]
    fn test_override_adds_new_field() {
        let stats = ProcessingStats::new();
        let defaults = rules(&[("title", "h1")]);
        let overrides = rules(&[("subtitle", "h2")]);
        let table = SelectorTable::merged(&defaults, Some(&overrides), &stats);

        assert!(table.resolve("title").is_some());
        assert!(table.resolve("subtitle").is_some());
    }

    #[test]
    fn test_missing_field_resolves_to_none() {
        let stats = ProcessingStats::new();
        let table = SelectorTable::merged(&rules(&[("title", "h1")]), None, &stats);
        assert!(table.resolve("nonexistent").is_none());
    }

    #[test]
    fn test_no_overrides_keeps_all_defaults() {
        let stats = ProcessingStats::new();
        let defaults = rules(&[("title", "h1"), ("price", ".price")]);
        let table = SelectorTable::merged(&defaults, None, &stats);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
