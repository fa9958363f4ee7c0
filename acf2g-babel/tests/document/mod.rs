//! Whole-record assembly tests

use crate::common::{layouts_of, site};
use acf2g_babel::{assemble, convert_layouts, ConvertError, ConverterRegistry};

#[test]
fn test_record_body_concatenates_layouts_in_order() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layouts = layouts_of(&store, 1);

    let parts: Vec<String> = layouts
        .iter()
        .map(|layout| registry.convert(layout, &store).unwrap())
        .collect();
    let body = assemble(&registry, &layouts, &store).unwrap();

    assert_eq!(body, parts.concat());
    assert!(body.starts_with("<!-- wp:heading --><h2>Summer trip</h2><!-- /wp:heading -->"));

    let heading = body.find("<!-- wp:heading").unwrap();
    let paragraph = body.find("<!-- wp:paragraph").unwrap();
    let image = body.find("<!-- wp:image").unwrap();
    let gallery = body.find("<!-- wp:gallery").unwrap();
    assert!(heading < paragraph && paragraph < image && image < gallery);
}

#[test]
fn test_conversion_is_idempotent() {
    let store = site();
    let layouts = layouts_of(&store, 1);

    let first = convert_layouts(&layouts, &store).unwrap();
    let second = convert_layouts(&layouts, &store).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_kind_aborts_record() {
    let store = site();
    let layouts = layouts_of(&store, 5);

    let result = convert_layouts(&layouts, &store);
    assert_eq!(
        result,
        Err(ConvertError::UnknownLayoutKind("mystery_block".to_string()))
    );
}

#[test]
fn test_record_without_layouts_has_empty_body() {
    let store = site();
    assert!(layouts_of(&store, 6).is_empty());
    assert_eq!(convert_layouts(&layouts_of(&store, 6), &store).unwrap(), "");
}
