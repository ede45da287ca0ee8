//! Shared utilities: text normalization and CSS selector parsing.

mod sanitize;
mod selector;

pub use sanitize::{clean_text, truncate_log_message};
pub use selector::{parse_selector_with_fallback, parse_static_selector};
