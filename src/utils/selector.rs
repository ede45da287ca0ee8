//! CSS selector parsing utilities.

use scraper::Selector;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Parses a caller-supplied CSS selector with a safe fallback.
///
/// Selector rules arrive as arbitrary strings from the request, so parse
/// failures are expected input, not programming errors. On failure this logs
/// an error, counts it, and returns a selector that matches nothing
/// (`*:not(*)`), which makes the affected field resolve to "not extractable"
/// instead of panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `field_name` - The field the rule belongs to, for error logging
/// * `stats` - Processing statistics tracker
///
/// # Returns
///
/// A parsed `Selector`, or a never-matching fallback if parsing fails.
pub fn parse_selector_with_fallback(
    selector_str: &str,
    field_name: &str,
    stats: &ProcessingStats,
) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' for field '{}': {}. Using fallback selector.",
            selector_str,
            field_name,
            e
        );
        stats.increment_error(ErrorType::InvalidSelector);
        parse_static_selector("*:not(*)")
    })
}

/// Parses a CSS selector that must succeed (compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed, which indicates a programming
/// error in a built-in selector string. Use
/// [`parse_selector_with_fallback`] for caller-supplied selectors.
pub fn parse_static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse built-in CSS selector '{}': {}. This is a programming error.",
            selector_str, e
        )
    })
}
