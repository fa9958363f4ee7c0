//! Image and gallery conversion against the fixture media library

use crate::common::{layouts_of, site};
use acf2g_babel::{ConverterRegistry, ImageRef, LayoutInstance};
use insta::assert_snapshot;

#[test]
fn test_single_image_set_becomes_image_block() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layouts = layouts_of(&store, 2);

    let out = registry.convert(&layouts[0], &store).unwrap();
    assert_snapshot!(out, @r#"<!-- wp:image {"id":11,"sizeSlug":"large"} --><figure class="wp-block-image size-large"><img src="https://example.com/wp-content/uploads/harbour-1024x683.jpg" alt="Harbour" class="wp-image-11"/></figure><!-- /wp:image -->"#);
}

#[test]
fn test_full_width_image_with_caption() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layout = LayoutInstance::new("image_full_width_block").with_field("image", ImageRef(10));

    let out = registry.convert(&layout, &store).unwrap();
    assert_snapshot!(out, @r#"<!-- wp:image {"id":10,"sizeSlug":"large","align":"wide"} --><figure class="wp-block-image alignwide size-large"><img src="https://example.com/wp-content/uploads/dunes-1024x683.jpg" alt="Dunes at dusk" class="wp-image-10"/><figcaption>The dunes</figcaption></figure><!-- /wp:image -->"#);
}

#[test]
fn test_four_images_become_three_column_gallery() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layouts = layouts_of(&store, 1);

    let out = registry.convert(&layouts[2], &store).unwrap();

    assert!(out.starts_with(r#"<!-- wp:gallery {"ids":[11,12,13,10]} --><figure class="wp-block-gallery columns-3 is-cropped"><ul class="blocks-gallery-grid">"#));
    assert!(out.ends_with("</ul></figure><!-- /wp:gallery -->"));
    assert_eq!(out.matches("<li class=\"blocks-gallery-item\">").count(), 4);

    // Items follow the image set order
    let positions: Vec<usize> = ["wp-image-11", "wp-image-12", "wp-image-13", "wp-image-10"]
        .iter()
        .map(|class| out.find(class).expect("image in gallery"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_gallery_item_enrichment() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layout = LayoutInstance::new("image_block")
        .with_field("image_set", vec![ImageRef(12), ImageRef(13)]);

    let out = registry.convert(&layout, &store).unwrap();

    // Missing alt text renders empty, captions only where present
    assert!(out.contains(r#"<img src="https://example.com/wp-content/uploads/lighthouse-1024x683.jpg" alt="" data-id="12" data-full-url="https://example.com/wp-content/uploads/lighthouse.jpg" data-link="https://example.com/lighthouse/" class="wp-image-12"/><figcaption class="blocks-gallery-item__caption">Lighthouse</figcaption>"#));
    assert!(out.contains(r#"class="wp-image-13"/></figure></li>"#));
    assert!(out.contains("columns-2"));
    assert_eq!(out.matches("<figcaption").count(), 1);
}

#[test]
fn test_unknown_image_fails_the_layout() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layout = LayoutInstance::new("image_block")
        .with_field("image_set", vec![ImageRef(10), ImageRef(999)]);

    let err = registry.convert(&layout, &store).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not resolve image 999: no such attachment"
    );
}
