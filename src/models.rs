//! Core data types shared across the extraction engine.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// An input HTML document plus its feature map.
///
/// Documents are supplied pre-fetched; the engine never performs network I/O.
/// The feature map carries document metadata, at minimum a `url` entry used
/// to resolve relative image sources. A document has no identity of its own:
/// it is identified by its position in the input batch.
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw HTML payload.
    pub html: String,
    /// Document metadata (at minimum a `url` entry for base-URL resolution).
    pub features: HashMap<String, String>,
}

impl Document {
    /// Creates a document with an empty feature map.
    pub fn new(html: impl Into<String>) -> Self {
        Document {
            html: html.into(),
            features: HashMap::new(),
        }
    }

    /// Creates a document whose feature map carries the given source URL.
    pub fn with_url(html: impl Into<String>, url: impl Into<String>) -> Self {
        let mut features = HashMap::new();
        features.insert("url".to_string(), url.into());
        Document {
            html: html.into(),
            features,
        }
    }

    /// The document's base URL, or an empty string if none was supplied.
    ///
    /// Relative image sources are resolved against this value.
    pub fn base_url(&self) -> &str {
        self.features.get("url").map(String::as_str).unwrap_or("")
    }
}

/// One image reference extracted from a document.
///
/// The `url` is the image source resolved against the document's base URL;
/// `alt` and `title` default to empty strings when the attributes are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRef {
    /// Resolved image URL.
    pub url: String,
    /// Alt text, or empty.
    pub alt: String,
    /// Title text, or empty.
    pub title: String,
}

/// A single extracted field value.
///
/// Serializes untagged, so records come out as natural JSON: strings,
/// numbers, arrays, and objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A numeric value (prices).
    Number(f64),
    /// A normalized text value (plain text fields, canonical dates).
    Text(String),
    /// An ordered list of text values (content paragraphs).
    TextList(Vec<String>),
    /// A list of image references.
    Images(Vec<ImageRef>),
    /// A key/value map (specification tables).
    Map(BTreeMap<String, String>),
}

/// A populated extraction record for one document.
///
/// Contains only fields that were both requested by the schema and resolved
/// to a value. The source document's feature map is carried along for
/// downstream attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    /// Extracted field values, keyed by field name.
    pub fields: BTreeMap<String, FieldValue>,
    /// Feature map of the source document.
    pub features: HashMap<String, String>,
}

/// The per-document result of an extraction.
///
/// Every input document produces exactly one outcome, in input order. A
/// failed document yields an explicit failure marker rather than a partial
/// record, so callers can distinguish "no documents supplied" (an empty
/// outcome list) from "document supplied but extraction failed".
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// Extraction succeeded and all required fields are present.
    Extracted(ExtractedRecord),
    /// Extraction failed; no partial data is returned.
    Failed,
}

impl ExtractionOutcome {
    /// Returns `true` for the failure marker.
    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed)
    }

    /// The extracted record, if extraction succeeded.
    pub fn record(&self) -> Option<&ExtractedRecord> {
        match self {
            ExtractionOutcome::Extracted(record) => Some(record),
            ExtractionOutcome::Failed => None,
        }
    }
}
