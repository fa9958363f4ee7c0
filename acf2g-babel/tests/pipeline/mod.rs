//! Batch conversion and analysis over the fixture site

use crate::common::{fixture_path, site};
use acf2g_babel::analysis::analyse;
use acf2g_babel::batch::{convert_records, BatchOptions};
use acf2g_babel::{ConvertError, ConverterRegistry, JsonStore, RecordFilter, RecordId};
use serde_json::Value;
use std::fs;

#[test]
fn test_convert_posts_in_batch() {
    let mut store = site();
    let registry = ConverterRegistry::with_defaults();

    let report = convert_records(
        &registry,
        &mut store,
        &RecordFilter::by_type("post", 10),
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.converted, vec![RecordId(1), RecordId(2), RecordId(4)]);
    assert_eq!(report.skipped, vec![RecordId(6)]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, RecordId(5));
    assert_eq!(
        report.failures[0].error,
        ConvertError::UnknownLayoutKind("mystery_block".to_string())
    );

    // Failed records keep their stored content
    assert_eq!(
        store.record(RecordId(5)).unwrap().content(),
        "<p>Original content</p>"
    );
    assert_eq!(
        store.record(RecordId(4)).unwrap().content(),
        "video blockbox blockmeasurement table block"
    );
    assert_eq!(
        store.record(RecordId(6)).unwrap().content(),
        "<p>Classic editor content</p>"
    );
    // Pages are outside the query
    assert_eq!(store.record(RecordId(3)).unwrap().content(), "");
}

#[test]
fn test_limit_bounds_the_batch() {
    let mut store = site();
    let registry = ConverterRegistry::with_defaults();

    let report = convert_records(
        &registry,
        &mut store,
        &RecordFilter::by_type("post", 2),
        BatchOptions { parallel: true },
    )
    .unwrap();

    assert_eq!(report.converted, vec![RecordId(1), RecordId(2)]);
    assert!(report.is_success());
    assert!(store
        .record(RecordId(2))
        .unwrap()
        .content()
        .starts_with(r#"<!-- wp:image {"id":11,"sizeSlug":"large"} -->"#));
}

#[test]
fn test_single_record_conversion_ignores_type() {
    let mut store = site();
    let registry = ConverterRegistry::with_defaults();

    let report = convert_records(
        &registry,
        &mut store,
        &RecordFilter::by_id(RecordId(3)),
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.converted, vec![RecordId(3)]);
    assert_eq!(
        store.record(RecordId(3)).unwrap().content(),
        "<!-- wp:paragraph --><p>About us</p><!-- /wp:paragraph -->"
    );
}

#[test]
fn test_analyse_site() {
    let store = site();
    let usage = analyse(&store, &RecordFilter::by_type("post", 10)).unwrap();

    let counts: Vec<(&str, usize)> = usage
        .kinds
        .iter()
        .map(|kind| (kind.kind.as_str(), kind.count()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("measurement_table_block", 1),
            ("box_block", 1),
            ("post_list_block", 0),
            ("text_block", 2),
            ("image_block", 2),
            ("image_full_width_block", 1),
            ("image_and_text_block", 0),
            ("video_block", 1),
            ("mystery_block", 1),
        ]
    );
    assert_eq!(
        usage.get("text_block").unwrap().record_ids,
        vec![RecordId(1), RecordId(5)]
    );
}

#[test]
fn test_batch_only_touches_converted_content() {
    let source = fs::read_to_string(fixture_path("site.json")).unwrap();
    let mut store = JsonStore::from_json(&source).unwrap();
    let registry = ConverterRegistry::with_defaults();

    let report = convert_records(
        &registry,
        &mut store,
        &RecordFilter::by_type("post", 10),
        BatchOptions::default(),
    )
    .unwrap();

    let before: Value = serde_json::from_str(&source).unwrap();
    let mut after: Value = serde_json::from_str(&store.to_json(true).unwrap()).unwrap();

    // Put the old bodies back; nothing else may differ
    for (post, old) in after["posts"]
        .as_array_mut()
        .unwrap()
        .iter_mut()
        .zip(before["posts"].as_array().unwrap())
    {
        if report.converted.contains(&RecordId(post["id"].as_u64().unwrap())) {
            assert_ne!(post["content"], old["content"]);
            post["content"] = old["content"].clone();
        }
    }
    assert_eq!(after, before);
    assert_eq!(after["posts"][0]["status"], "publish");
    assert_eq!(
        after["posts"][0]["content_blocks"][2]["image_set"][0]["credit"],
        "Harbour office"
    );
    assert_eq!(after["attachments"][0]["mime_type"], "image/jpeg");
    assert!(after["attachments"][1].get("alt").is_some());
    assert!(after["attachments"][2].get("alt").is_none());
}
