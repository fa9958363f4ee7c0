use crate::common::{layouts_of, site};
use acf2g_babel::{ConverterRegistry, JsonStore, LayoutInstance};
use insta::assert_snapshot;
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

static BLOCK_OPENER: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!-- wp:([a-z/]+) ").unwrap());

fn block_names(serialized: &str) -> Vec<String> {
    BLOCK_OPENER
        .captures_iter(serialized)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[test]
fn test_title_and_text() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layouts = layouts_of(&store, 1);

    let out = registry.convert(&layouts[0], &store).unwrap();
    assert_snapshot!(out, @"<!-- wp:heading --><h2>Summer trip</h2><!-- /wp:heading --><!-- wp:paragraph --><p>We went to the coast.</p><!-- /wp:paragraph -->");
}

#[test]
fn test_text_without_title() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layouts = layouts_of(&store, 3);

    let out = registry.convert(&layouts[0], &store).unwrap();
    assert_eq!(block_names(&out), vec!["paragraph"]);
    assert_eq!(
        out,
        "<!-- wp:paragraph --><p>About us</p><!-- /wp:paragraph -->"
    );
}

proptest! {
    #[test]
    fn text_block_emits_one_block_per_filled_field(
        title in "[A-Za-z0-9 ]{0,24}",
        text in "[A-Za-z0-9 ]{0,48}",
    ) {
        let registry = ConverterRegistry::with_defaults();
        let layout = LayoutInstance::new("text_block")
            .with_field("title", title.as_str())
            .with_field("text", text.as_str());

        let out = registry.convert(&layout, &JsonStore::default()).unwrap();

        let mut expected = Vec::new();
        if !title.is_empty() {
            expected.push("heading");
        }
        if !text.is_empty() {
            expected.push("paragraph");
        }
        prop_assert_eq!(block_names(&out), expected);

        if !title.is_empty() {
            let heading = format!("<h2>{}</h2>", title);
            prop_assert!(out.contains(&heading));
        }
    }
}
