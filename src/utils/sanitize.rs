//! Text normalization and log message sanitization.
//!
//! `clean_text` is the whitespace normalizer applied to every extracted text
//! node before coercion. The sanitization helpers keep caught panic payloads
//! readable before they reach the log.

use crate::config::MAX_LOG_MESSAGE_LENGTH;

/// Normalizes extracted text.
///
/// Collapses any run of whitespace characters (including newlines and tabs)
/// into a single space and trims leading/trailing whitespace. Empty input
/// yields an empty string. Pure and total; there are no error conditions.
///
/// # Arguments
///
/// * `text` - The raw text to normalize
///
/// # Returns
///
/// The normalized text.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitizes and truncates a message before logging.
///
/// Removes control characters (0x00-0x1F except newline, tab, and carriage
/// return), then truncates to [`MAX_LOG_MESSAGE_LENGTH`] with a truncation
/// indicator. Panic payloads can carry arbitrary strings; this keeps the log
/// line bounded and printable.
///
/// # Arguments
///
/// * `message` - The message to sanitize and truncate
///
/// # Returns
///
/// A sanitized, length-bounded version of the message.
pub fn truncate_log_message(message: &str) -> String {
    let sanitized: String = message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect();

    if sanitized.len() > MAX_LOG_MESSAGE_LENGTH {
        let truncate_len = MAX_LOG_MESSAGE_LENGTH.saturating_sub(50);
        // Back off to a char boundary so slicing cannot panic on multibyte input
        let truncate_len = (0..=truncate_len.min(sanitized.len()))
            .rev()
            .find(|i| sanitized.is_char_boundary(*i))
            .unwrap_or(0);
        format!(
            "{}... (truncated, original length: {} chars)",
            &sanitized[..truncate_len],
            sanitized.len()
        )
    } else {
        sanitized
    }
}
