use crate::converter::LayoutConverter;
use crate::error::{ConvertError, Result};
use crate::layout::{LayoutInstance, LayoutKind};
use crate::markup::{build_serialized_gallery_block, build_serialized_image_block};
use crate::store::ImageResolver;

const IMAGE_SET_FIELD: &str = "image_set";
const IMAGE_FIELD: &str = "image";
const WIDE: &str = "wide";

/// `image_block`: one image, or a gallery when the set holds several.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageBlockConverter;

impl LayoutConverter for ImageBlockConverter {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Image
    }

    fn description(&self) -> &str {
        "Image block, or gallery block for multiple images"
    }

    fn convert(&self, layout: &LayoutInstance, resolver: &dyn ImageResolver) -> Result<String> {
        let images = layout.image_set(IMAGE_SET_FIELD);
        match images.as_slice() {
            [] => Ok(String::new()),
            [image] => build_serialized_image_block(resolver, *image, None),
            _ => build_serialized_gallery_block(resolver, &images),
        }
    }
}

/// `image_full_width_block`: a single wide-aligned image.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFullWidthConverter;

impl LayoutConverter for ImageFullWidthConverter {
    fn kind(&self) -> LayoutKind {
        LayoutKind::ImageFullWidth
    }

    fn description(&self) -> &str {
        "Wide aligned image block"
    }

    fn convert(&self, layout: &LayoutInstance, resolver: &dyn ImageResolver) -> Result<String> {
        let image = layout
            .image(IMAGE_FIELD)
            .ok_or_else(|| ConvertError::MissingField {
                kind: self.kind(),
                field: IMAGE_FIELD.to_string(),
            })?;
        build_serialized_image_block(resolver, image, Some(WIDE))
    }
}
