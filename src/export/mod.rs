//! Export functionality for extraction outcomes.
//!
//! This module writes extraction outcomes as JSONL (JSON Lines) for
//! programmatic processing, piping to `jq`, or loading into databases.

mod jsonl;

pub use jsonl::{export_jsonl, write_outcomes};
