//! Converters for the built-in layout kinds
//!
//! | kind                      | output                                                    |
//! |---------------------------|-----------------------------------------------------------|
//! | `text_block`              | `heading` block for `title`, `paragraph` block for `text` |
//! | `image_block`             | `image` block for one entry, `gallery` block for more     |
//! | `image_full_width_block`  | `image` block aligned `wide`                              |
//! | `video_block`             | stub text                                                 |
//! | `post_list_block`         | stub text                                                 |
//! | `image_and_text_block`    | stub text                                                 |
//! | `measurement_table_block` | stub text                                                 |
//! | `box_block`               | stub text                                                 |
//!
//! Stubbed kinds have no block equivalent yet. Their stub names the kind so the
//! converted content shows where manual work is needed.

pub mod image;
pub mod placeholder;
pub mod text;

pub use image::{ImageBlockConverter, ImageFullWidthConverter};
pub use placeholder::PlaceholderConverter;
pub use text::TextBlockConverter;
