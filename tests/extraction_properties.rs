//! End-to-end properties of the extraction engine, exercised through the
//! public API: batch order and cardinality, the required-field gate,
//! selector override precedence, per-kind coercion, failure isolation, and
//! idempotence.

use std::collections::BTreeMap;

use web_extract::{
    Document, ExtractionSchema, Extractor, FieldDescriptor, FieldKind, FieldValue,
};

fn schema(properties: &[&str], required: &[&str]) -> ExtractionSchema {
    ExtractionSchema {
        schema_type: "object".to_string(),
        properties: properties
            .iter()
            .map(|name| (name.to_string(), FieldDescriptor::default()))
            .collect(),
        required: required.iter().map(|name| name.to_string()).collect(),
    }
}

fn rules(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn text_field(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

#[test]
fn batch_preserves_order_and_cardinality() {
    let extractor = Extractor::new();
    let documents = vec![
        Document::new("<h1>alpha</h1>"),
        Document::new("<h1>beta</h1>"),
        Document::new("<p>nothing titled here</p>"),
        Document::new("<h1>gamma</h1>"),
    ];

    let outcomes = extractor.extract_all(&documents, &schema(&["title"], &["title"]), None);

    assert_eq!(outcomes.len(), documents.len());
    assert_eq!(
        outcomes[0].record().unwrap().fields.get("title"),
        Some(&text_field("alpha"))
    );
    assert_eq!(
        outcomes[1].record().unwrap().fields.get("title"),
        Some(&text_field("beta"))
    );
    assert!(outcomes[2].is_failed());
    assert_eq!(
        outcomes[3].record().unwrap().fields.get("title"),
        Some(&text_field("gamma"))
    );
}

#[test]
fn empty_batch_is_distinguishable_from_failures() {
    let extractor = Extractor::new();
    let outcomes = extractor.extract_all(&[], &schema(&["title"], &["title"]), None);
    // No documents supplied: an empty list, not failure markers
    assert!(outcomes.is_empty());
}

#[test]
fn required_field_gate_never_returns_partial_records() {
    let extractor = Extractor::new();
    // The author is extractable but the required title is not
    let documents = vec![Document::new(
        "<span class=\"byline\">Jo Author</span><p>body</p>",
    )];

    let outcomes = extractor.extract_all(
        &documents,
        &schema(&["title", "author"], &["title"]),
        None,
    );

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_failed());
    assert!(outcomes[0].record().is_none());
}

#[test]
fn selector_overrides_take_precedence_field_by_field() {
    let extractor = Extractor::with_default_rules(rules(&[
        ("title", "h1"),
        ("author", ".byline"),
    ]));
    let overrides = rules(&[("title", ".custom-title")]);
    let documents = vec![Document::new(
        "<h1>Default Title</h1>\
         <div class=\"custom-title\">Override Title</div>\
         <span class=\"byline\">Jo</span>",
    )];

    let outcomes = extractor.extract_all(
        &documents,
        &schema(&["title", "author"], &[]),
        Some(&overrides),
    );

    let record = outcomes[0].record().unwrap();
    // The override wins for title
    assert_eq!(record.fields.get("title"), Some(&text_field("Override Title")));
    // Fields without an override keep their defaults
    assert_eq!(record.fields.get("author"), Some(&text_field("Jo")));
}

#[test]
fn price_field_coerces_to_number() {
    let extractor = Extractor::new();
    let documents = vec![
        Document::new("<h1>t</h1><span class=\"price\">$1,299.99 USD</span>"),
        Document::new("<h1>t</h1><span class=\"price\">Contact us</span>"),
    ];

    let outcomes = extractor.extract_all(&documents, &schema(&["title", "price"], &[]), None);

    assert_eq!(
        outcomes[0].record().unwrap().fields.get("price"),
        Some(&FieldValue::Number(1299.99))
    );
    // Unparsable price: field omitted, document still succeeds
    let record = outcomes[1].record().unwrap();
    assert!(!record.fields.contains_key("price"));
    assert!(record.fields.contains_key("title"));
}

#[test]
fn date_field_emits_canonical_iso() {
    let extractor = Extractor::new();
    let documents = vec![
        Document::new("<h1>t</h1><time>Published on 2023-05-17</time>"),
        Document::new("<h1>t</h1><time>Updated 05/17/2023</time>"),
        Document::new("<h1>t</h1><time>May 17, 2023</time>"),
        Document::new("<h1>t</h1><time>no date-like text</time>"),
    ];

    let outcomes =
        extractor.extract_all(&documents, &schema(&["title", "publishDate"], &[]), None);

    for outcome in &outcomes[..3] {
        assert_eq!(
            outcome.record().unwrap().fields.get("publishDate"),
            Some(&text_field("2023-05-17T00:00:00"))
        );
    }
    assert!(!outcomes[3]
        .record()
        .unwrap()
        .fields
        .contains_key("publishDate"));
}

#[test]
fn content_field_collects_paragraphs() {
    let extractor = Extractor::new();
    let documents = vec![Document::new(
        "<h1>t</h1>\
         <article><p>First paragraph.</p><p>  </p><p>Second\n paragraph.</p></article>",
    )];

    let outcomes = extractor.extract_all(&documents, &schema(&["title", "content"], &[]), None);

    assert_eq!(
        outcomes[0].record().unwrap().fields.get("content"),
        Some(&FieldValue::TextList(vec![
            "First paragraph.".to_string(),
            "Second paragraph.".to_string(),
        ]))
    );
}

#[test]
fn images_resolve_against_document_base_url() {
    let extractor = Extractor::new();
    let documents = vec![Document::with_url(
        "<h1>t</h1>\
         <div class=\"product-images\"><img src=\"/a.png\" alt=\"A\"></div>",
        "http://example.com/page",
    )];

    let outcomes = extractor.extract_all(&documents, &schema(&["title", "images"], &[]), None);

    let record = outcomes[0].record().unwrap();
    match record.fields.get("images") {
        Some(FieldValue::Images(images)) => {
            assert_eq!(images.len(), 1);
            assert_eq!(images[0].url, "http://example.com/a.png");
            assert_eq!(images[0].alt, "A");
            assert_eq!(images[0].title, "");
        }
        other => panic!("expected an image list, got {:?}", other),
    }
}

#[test]
fn specifications_drop_empty_value_rows() {
    let extractor = Extractor::new();
    let documents = vec![Document::new(
        "<h1>t</h1>\
         <table class=\"specifications\">\
         <tr><th>Weight:</th><td>2kg</td></tr>\
         <tr><th>Color:</th><td></td></tr>\
         </table>",
    )];

    let outcomes = extractor.extract_all(
        &documents,
        &schema(&["title", "specifications"], &[]),
        None,
    );

    let record = outcomes[0].record().unwrap();
    match record.fields.get("specifications") {
        Some(FieldValue::Map(specs)) => {
            assert_eq!(specs.len(), 1);
            assert_eq!(specs.get("Weight").map(String::as_str), Some("2kg"));
        }
        other => panic!("expected a specification map, got {:?}", other),
    }
}

#[test]
fn explicit_field_kind_overrides_name_convention() {
    let extractor = Extractor::with_default_rules(rules(&[("cost", ".amount")]));
    let mut schema = schema(&[], &[]);
    schema.properties.insert(
        "cost".to_string(),
        FieldDescriptor {
            kind: Some(FieldKind::Price),
            ..Default::default()
        },
    );
    let documents = vec![Document::new("<span class=\"amount\">around 250 eur</span>")];

    let outcomes = extractor.extract_all(&documents, &schema, None);

    // "cost" carries no price suffix, but the declared kind wins
    assert_eq!(
        outcomes[0].record().unwrap().fields.get("cost"),
        Some(&FieldValue::Number(250.0))
    );
}

#[test]
fn malformed_document_does_not_suppress_neighbors() {
    let extractor = Extractor::new();
    let documents = vec![
        Document::new("<h1>good before</h1>"),
        // Tag soup with nothing the title rule can match
        Document::new("<<<%%%></span>>>$$@ not <div really html"),
        Document::new("<h1>good after</h1>"),
    ];

    let outcomes = extractor.extract_all(&documents, &schema(&["title"], &["title"]), None);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes[0].record().unwrap().fields.get("title"),
        Some(&text_field("good before"))
    );
    assert!(outcomes[1].is_failed());
    assert_eq!(
        outcomes[2].record().unwrap().fields.get("title"),
        Some(&text_field("good after"))
    );
}

#[test]
fn invalid_selector_override_only_disables_its_field() {
    let extractor = Extractor::new();
    let overrides = rules(&[("title", "h1...[")]);
    let documents = vec![Document::new(
        "<h1>Headline</h1><span class=\"byline\">Jo</span>",
    )];

    let outcomes = extractor.extract_all(
        &documents,
        &schema(&["title", "author"], &[]),
        Some(&overrides),
    );

    let record = outcomes[0].record().unwrap();
    // The broken override makes title unextractable rather than panicking
    assert!(!record.fields.contains_key("title"));
    assert_eq!(record.fields.get("author"), Some(&text_field("Jo")));
}

#[test]
fn extraction_is_idempotent() {
    let extractor = Extractor::new();
    let documents = vec![
        Document::with_url(
            "<h1>Widget</h1>\
             <span class=\"price\">$19.99</span>\
             <time>2024-02-03</time>\
             <article><p>Body text.</p></article>",
            "http://example.com/widget",
        ),
        Document::new("<p>fails the gate</p>"),
    ];
    let target = schema(&["title", "price", "publishDate", "content"], &["title"]);

    let first = extractor.extract_all(&documents, &target, None);
    let second = extractor.extract_all(&documents, &target, None);

    assert_eq!(first, second);
}
