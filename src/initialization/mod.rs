//! Process initialization helpers.
//!
//! Currently only logger setup lives here; it is public so the CLI binary
//! (and embedding applications) can initialize logging before running an
//! extraction.

mod logger;

pub use logger::init_logger_with;
