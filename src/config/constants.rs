//! Configuration constants.
//!
//! This module defines the built-in selector rule table and operational
//! limits used throughout the application.

/// Built-in selector rules, applied when a caller supplies no override for a
/// field.
///
/// Each entry maps an output field name to a CSS selector. Callers overlay
/// their own rules field-by-field; entries here are never removed by an
/// override, only replaced.
///
/// Comma-separated selectors are tried left to right by the CSS engine; the
/// first element in document order matching any alternative wins.
pub const DEFAULT_SELECTOR_RULES: &[(&str, &str)] = &[
    ("title", "h1, .title, .post-title"),
    ("author", ".author, .byline, .post-author"),
    ("publishDate", ".date, time, .published-date"),
    ("content", "article, .content, .post-content, .entry-content"),
    ("productName", "h1, .product-title"),
    ("price", ".price, .product-price"),
    ("description", ".description, .product-description"),
    ("specifications", ".specifications, .specs, .product-specs"),
    ("images", ".content img, .product-images"),
];

/// Maximum length of a logged panic or error message.
///
/// Messages longer than this are truncated before logging to keep log lines
/// readable when a panic payload carries a large string.
pub const MAX_LOG_MESSAGE_LENGTH: usize = 500;
