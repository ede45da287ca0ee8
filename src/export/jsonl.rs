//! JSONL export functionality.
//!
//! Each line is a complete JSON object representing one input document's
//! outcome, in batch order. Extracted records carry their fields and the
//! source document's feature map; failed documents carry an explicit failure
//! status and no data, so the output line count always equals the input
//! document count.

use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::models::ExtractionOutcome;

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that
/// exits early.
struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                // Ignore broken pipe - downstream command closed the pipe
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes outcomes as JSON Lines to the given writer.
///
/// # Returns
///
/// The number of lines written (always equal to the outcome count).
pub fn write_outcomes<W: Write>(writer: &mut W, outcomes: &[ExtractionOutcome]) -> Result<usize> {
    for outcome in outcomes {
        let json_obj = match outcome {
            ExtractionOutcome::Extracted(record) => json!({
                "status": "extracted",
                "data": record.fields,
                "features": record.features,
            }),
            ExtractionOutcome::Failed => json!({
                "status": "failed",
            }),
        };
        serde_json::to_writer(&mut *writer, &json_obj)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(outcomes.len())
}

/// Exports outcomes to JSONL on a file or stdout.
///
/// # Arguments
///
/// * `outcomes` - The per-document outcomes, in batch order
/// * `output` - Output file path, or `None` for stdout
///
/// # Returns
///
/// The number of records exported, or an error if the output file cannot be
/// created or written.
pub fn export_jsonl(outcomes: &[ExtractionOutcome], output: Option<&Path>) -> Result<usize> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_outcomes(&mut file, outcomes)
        }
        None => {
            let mut writer = IgnoreBrokenPipe::new(io::stdout());
            write_outcomes(&mut writer, outcomes)
        }
    }
}
