use crate::block::Block;
use crate::error::Result;
use crate::layout::ImageRef;
use crate::store::ImageResolver;

const SIZE_SLUG: &str = "large";

/// Render the figure markup for a single image.
pub fn render_image(
    resolver: &dyn ImageResolver,
    image: ImageRef,
    align: Option<&str>,
) -> Result<String> {
    let meta = resolver.resolve_image(image)?;

    let align_class = align.map(|a| format!(" align{a}")).unwrap_or_default();
    let caption = if meta.caption.is_empty() {
        String::new()
    } else {
        format!("<figcaption>{}</figcaption>", meta.caption)
    };

    Ok(format!(
        "<figure class=\"wp-block-image{align_class} size-{SIZE_SLUG}\"><img src=\"{src}\" alt=\"{alt}\" class=\"wp-image-{image}\"/>{caption}</figure>",
        src = meta.src_large,
        alt = meta.alt,
    ))
}

/// Render and serialize an `image` block.
pub fn build_serialized_image_block(
    resolver: &dyn ImageResolver,
    image: ImageRef,
    align: Option<&str>,
) -> Result<String> {
    let html = render_image(resolver, image, align)?;

    let mut block = Block::new("image", html)
        .with_attr("id", image.0)
        .with_attr("sizeSlug", SIZE_SLUG);
    if let Some(align) = align {
        block = block.with_attr("align", align);
    }

    block.serialize()
}
