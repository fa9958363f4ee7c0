use crate::block::Block;
use crate::converter::LayoutConverter;
use crate::error::Result;
use crate::layout::{LayoutInstance, LayoutKind};
use crate::store::ImageResolver;

const TITLE_FIELD: &str = "title";
const TEXT_FIELD: &str = "text";

/// `text_block`: optional heading followed by an optional paragraph.
///
/// The text field already holds rich text markup and is passed through as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextBlockConverter;

impl LayoutConverter for TextBlockConverter {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Text
    }

    fn description(&self) -> &str {
        "Heading and paragraph blocks"
    }

    fn convert(&self, layout: &LayoutInstance, _resolver: &dyn ImageResolver) -> Result<String> {
        let mut out = String::new();

        let title = layout.text(TITLE_FIELD);
        if !title.is_empty() {
            out.push_str(&Block::new("heading", format!("<h2>{title}</h2>")).serialize()?);
        }

        let text = layout.text(TEXT_FIELD);
        if !text.is_empty() {
            out.push_str(&Block::new("paragraph", text).serialize()?);
        }

        Ok(out)
    }
}
