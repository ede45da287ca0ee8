//! Per-kind field coercion.
//!
//! A coercer converts one matched HTML element (or its subtree) into a typed
//! output value. Every coercer is a pure function of the element, the field
//! kind, and the document's base URL; there is no cross-field or
//! cross-document state. A coercion miss yields [`FieldOutcome::Absent`],
//! never an error: the field is simply omitted from the record.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::{FieldValue, ImageRef};
use crate::schema::FieldKind;
use crate::utils::{clean_text, parse_static_selector};

// Built-in selectors for the collection coercers
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("p"));
static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_static_selector("img"));
static TABLE_ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("tr"));
static LIST_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("li"));
static HEADER_CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("th"));
static DATA_CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("td"));
static EMPHASIS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("strong"));

/// First run of price-like characters (digits, dots, commas) in a text.
static PRICE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\d.,]+").expect("price token pattern is a valid regex literal")
});

/// Date patterns scanned in fixed order, each paired with the chrono formats
/// that can parse its matches. The month-name pattern allows an optional
/// comma and abbreviated names, so it carries one format per variant.
static DATE_PATTERNS: LazyLock<Vec<(Regex, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\d{4}-\d{2}-\d{2}").expect("ISO date pattern is a valid regex literal"),
            vec!["%Y-%m-%d"],
        ),
        (
            Regex::new(r"\d{2}/\d{2}/\d{4}").expect("US date pattern is a valid regex literal"),
            vec!["%m/%d/%Y"],
        ),
        (
            Regex::new(r"\w+ \d{1,2},? \d{4}")
                .expect("month-name date pattern is a valid regex literal"),
            vec!["%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%b %d %Y"],
        ),
    ]
});

/// The result of coercing one field.
///
/// Absence is data, not an exception: an absent field is omitted from the
/// record and extraction of the remaining fields continues.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// The field produced a value.
    Extracted(FieldValue),
    /// No value could be extracted; the field is omitted.
    Absent,
}

/// Coerces a matched element into an output value for the given field kind.
///
/// Misses on the value-producing kinds (price, date, specifications) are
/// counted as info metrics; the collection kinds (paragraphs, images) yield
/// an empty list rather than going absent.
pub fn coerce(
    element: ElementRef<'_>,
    kind: FieldKind,
    base_url: &str,
    stats: &ProcessingStats,
) -> FieldOutcome {
    match kind {
        FieldKind::Price => match coerce_price(&element_text(element)) {
            Some(amount) => FieldOutcome::Extracted(FieldValue::Number(amount)),
            None => {
                stats.increment_info(InfoType::CoercionMiss);
                FieldOutcome::Absent
            }
        },
        FieldKind::Date => match coerce_date(&element_text(element)) {
            Some(date) => FieldOutcome::Extracted(FieldValue::Text(date)),
            None => {
                stats.increment_info(InfoType::CoercionMiss);
                FieldOutcome::Absent
            }
        },
        FieldKind::ParagraphList => {
            FieldOutcome::Extracted(FieldValue::TextList(coerce_paragraphs(element)))
        }
        FieldKind::ImageList => {
            FieldOutcome::Extracted(FieldValue::Images(coerce_images(element, base_url)))
        }
        FieldKind::SpecificationMap => match coerce_specifications(element) {
            Some(specs) => FieldOutcome::Extracted(FieldValue::Map(specs)),
            None => {
                stats.increment_info(InfoType::CoercionMiss);
                FieldOutcome::Absent
            }
        },
        FieldKind::PlainText => FieldOutcome::Extracted(FieldValue::Text(element_text(element))),
    }
}

/// Normalized text content of an element, nested tags flattened.
fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Extracts the first numeric token and parses it as a decimal.
///
/// Commas are treated as thousands separators and stripped before parsing.
/// No token, or a token that is not a number (e.g. a bare "."), yields
/// `None`.
fn coerce_price(text: &str) -> Option<f64> {
    let token = PRICE_TOKEN_RE.find(text)?;
    token.as_str().replace(',', "").parse::<f64>().ok()
}

/// Scans the ordered date patterns and emits a canonical ISO-8601 string.
///
/// The first pattern whose match also parses wins. A match that fails to
/// parse (e.g. "13/45/2023") falls through to the next pattern rather than
/// failing the field outright.
fn coerce_date(text: &str) -> Option<String> {
    for (pattern, formats) in DATE_PATTERNS.iter() {
        let Some(matched) = pattern.find(text) else {
            continue;
        };
        for format in formats {
            if let Ok(date) = NaiveDate::parse_from_str(matched.as_str(), format) {
                return date
                    .and_hms_opt(0, 0, 0)
                    .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string());
            }
        }
    }
    None
}

/// Collects all paragraph descendants of the root, normalized, empties
/// dropped. An element with no paragraphs yields an empty list, not an
/// absent field.
fn coerce_paragraphs(root: ElementRef<'_>) -> Vec<String> {
    root.select(&PARAGRAPH_SELECTOR)
        .map(|paragraph| element_text(paragraph))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Collects all image descendants of the root.
///
/// Images without a `src` attribute are skipped; `alt` and `title` default
/// to empty strings. Sources are resolved against the document's base URL.
fn coerce_images(root: ElementRef<'_>, base_url: &str) -> Vec<ImageRef> {
    root.select(&IMAGE_SELECTOR)
        .filter_map(|img| {
            let src = img.value().attr("src")?;
            Some(ImageRef {
                url: resolve_src(base_url, src),
                alt: img.value().attr("alt").unwrap_or("").to_string(),
                title: img.value().attr("title").unwrap_or("").to_string(),
            })
        })
        .collect()
}

/// Resolves an image source against the document's base URL.
///
/// An unparseable base URL or a source that cannot be joined falls back to
/// the raw source string.
fn resolve_src(base_url: &str, src: &str) -> String {
    match Url::parse(base_url) {
        Ok(base) => base
            .join(src)
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| src.to_string()),
        Err(_) => src.to_string(),
    }
}

/// Collects key/value pairs from the root's row-like descendants.
///
/// Table rows (`tr`) are used when present, list items (`li`) otherwise.
/// An empty result is a miss (`None`), not an empty map.
fn coerce_specifications(root: ElementRef<'_>) -> Option<BTreeMap<String, String>> {
    let mut rows: Vec<ElementRef<'_>> = root.select(&TABLE_ROW_SELECTOR).collect();
    if rows.is_empty() {
        rows = root.select(&LIST_ITEM_SELECTOR).collect();
    }

    let mut specs = BTreeMap::new();
    for row in rows {
        if let Some((key, value)) = row_key_value(row) {
            specs.insert(key, value);
        }
    }

    if specs.is_empty() {
        None
    } else {
        Some(specs)
    }
}

/// Discovers one row's key and value.
///
/// Two strategies in order, per side: the key comes from the first header
/// cell (`th`), falling back to the first emphasized element (`strong`); the
/// value comes from the first data cell (`td`), falling back to the row's
/// first bare (direct-child) text node. The key loses one trailing colon.
/// A row where either side normalizes to empty yields no pair.
fn row_key_value(row: ElementRef<'_>) -> Option<(String, String)> {
    let key_element = row
        .select(&HEADER_CELL_SELECTOR)
        .next()
        .or_else(|| row.select(&EMPHASIS_SELECTOR).next())?;
    let key = element_text(key_element);
    let key = key.strip_suffix(':').unwrap_or(key.as_str()).trim_end();

    let value = match row.select(&DATA_CELL_SELECTOR).next() {
        Some(cell) => element_text(cell),
        None => row
            .children()
            .find_map(|node| node.value().as_text().map(|text| clean_text(text)))
            .unwrap_or_default(),
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key.to_string(), value))
}
