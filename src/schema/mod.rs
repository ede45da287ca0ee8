//! Extraction request schema types.
//!
//! This module defines the configuration shape accepted by the engine:
//! the target schema (field descriptors plus required-field names), optional
//! caller selector rules, and the declared JSON schema of the whole request
//! exposed for upstream validation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How a field's matched element is coerced into an output value.
///
/// Coercion selection is a table lookup on this enum. Requests that omit the
/// kind fall back to [`FieldKind::infer`], which reproduces the field-name
/// conventions of the original selector-rule format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Normalized text content of the matched element.
    PlainText,
    /// First numeric token of the element text, parsed as a decimal.
    Price,
    /// First recognized date substring, emitted as a canonical ISO-8601 string.
    Date,
    /// All paragraph descendants of the matched element, as an ordered list.
    ParagraphList,
    /// All image descendants of the matched element, with resolved URLs.
    ImageList,
    /// Key/value pairs from table-row or list-item descendants.
    SpecificationMap,
}

impl FieldKind {
    /// Infers a field kind from its name.
    ///
    /// Matches the naming conventions of the original request format: a
    /// field name ending in "price" or "date" (case-insensitive) selects the
    /// respective coercion, the exact names "content", "images", and
    /// "specifications" select their collection coercions, and anything else
    /// is plain text.
    pub fn infer(field_name: &str) -> FieldKind {
        let lower = field_name.to_lowercase();
        if lower.ends_with("price") {
            FieldKind::Price
        } else if lower.ends_with("date") {
            FieldKind::Date
        } else if field_name == "content" {
            FieldKind::ParagraphList
        } else if field_name == "images" {
            FieldKind::ImageList
        } else if field_name == "specifications" {
            FieldKind::SpecificationMap
        } else {
            FieldKind::PlainText
        }
    }
}

/// Schema entry describing one output field.
///
/// Only the coercion kind influences extraction today; the remaining type
/// metadata is accepted and carried for upstream tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Explicit coercion kind. When absent, the kind is inferred from the
    /// field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    /// Declared value type (e.g. "string", "number"); informational.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Human-readable description; informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDescriptor {
    /// Resolves the effective coercion kind for the named field.
    pub fn kind_for(&self, field_name: &str) -> FieldKind {
        self.kind.unwrap_or_else(|| FieldKind::infer(field_name))
    }
}

/// The target schema for one extraction request.
///
/// Immutable per call: constructed from the incoming request and discarded
/// after use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSchema {
    /// Schema type; always "object" for this engine's scope.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Field name to descriptor. Every declared property is attempted.
    pub properties: BTreeMap<String, FieldDescriptor>,
    /// Field names that must be present for a record to be valid.
    #[serde(default)]
    pub required: Vec<String>,
}

/// One pre-fetched document named by an extraction request file.
///
/// Consumed only by the CLI layer; the engine itself receives in-memory
/// [`crate::Document`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSource {
    /// Path to the HTML file.
    pub path: PathBuf,
    /// Source URL for base-URL resolution. Defaults to the file's own
    /// `file://` URL when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The full configuration accepted from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParams {
    /// Target schema; required.
    pub schema: ExtractionSchema,
    /// Partial selector-rule overrides, merged over the engine defaults
    /// field-by-field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_rules: Option<BTreeMap<String, String>>,
    /// Optional document manifest for the CLI layer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentSource>,
}

/// The declared JSON shape of the accepted configuration.
///
/// Exposed so upstream request layers can validate payloads before handing
/// them to the engine: `schema` is required, `selector_rules` is an optional
/// string-to-string map.
pub fn input_params_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "schema": {
                "type": "object",
                "properties": {
                    "type": {"type": "string"},
                    "properties": {"type": "object"},
                    "required": {
                        "type": "array",
                        "items": {"type": "string"}
                    }
                },
                "required": ["type", "properties"]
            },
            "selector_rules": {
                "type": "object",
                "additionalProperties": {"type": "string"}
            }
        },
        "required": ["schema"]
    })
}
