use crate::block::Block;
use crate::error::{ConvertError, Result};
use crate::layout::ImageRef;
use crate::store::ImageResolver;
use serde_json::Value;

/// Galleries never lay out more than this many columns.
pub const MAX_GALLERY_COLUMNS: usize = 3;

/// Render the gallery markup for a non-empty list of images.
pub fn render_gallery(resolver: &dyn ImageResolver, images: &[ImageRef]) -> Result<String> {
    if images.is_empty() {
        return Err(ConvertError::EmptyGallery);
    }

    let columns = images.len().min(MAX_GALLERY_COLUMNS);
    let mut html = format!(
        "<figure class=\"wp-block-gallery columns-{columns} is-cropped\"><ul class=\"blocks-gallery-grid\">"
    );

    for &image in images {
        let meta = resolver.resolve_image(image)?;
        let caption = if meta.caption.is_empty() {
            String::new()
        } else {
            format!(
                "<figcaption class=\"blocks-gallery-item__caption\">{}</figcaption>",
                meta.caption
            )
        };

        html.push_str(&format!(
            "<li class=\"blocks-gallery-item\"><figure><img src=\"{src}\" alt=\"{alt}\" data-id=\"{image}\" data-full-url=\"{full}\" data-link=\"{link}\" class=\"wp-image-{image}\"/>{caption}</figure></li>",
            src = meta.src_large,
            alt = meta.alt,
            full = meta.src_full,
            link = meta.link,
        ));
    }

    html.push_str("</ul></figure>");
    Ok(html)
}

/// Render and serialize a `gallery` block.
pub fn build_serialized_gallery_block(
    resolver: &dyn ImageResolver,
    images: &[ImageRef],
) -> Result<String> {
    let html = render_gallery(resolver, images)?;
    let ids: Vec<Value> = images.iter().map(|image| Value::from(image.0)).collect();

    Block::new("gallery", html).with_attr("ids", ids).serialize()
}
