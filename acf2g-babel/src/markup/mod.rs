//! Image and gallery markup builders
//!
//! Both builders resolve image metadata through an
//! [`ImageResolver`](crate::store::ImageResolver) and emit the figure markup the
//! block editor produces for its own image and gallery blocks, so converted
//! content opens in the editor without block validation warnings.
//!
//! Matching the editor's own save output is the goal, not byte equality with
//! older converters: every attribute value is double quoted, the gallery item
//! caption class included (`class="blocks-gallery-item__caption"`).
//!
//! | builder   | block     | attributes                              |
//! |-----------|-----------|-----------------------------------------|
//! | image     | `image`   | `id`, `sizeSlug` (always `large`), `align` when given |
//! | gallery   | `gallery` | `ids` (order and duplicates preserved)  |

pub mod gallery;
pub mod image;

pub use gallery::{build_serialized_gallery_block, render_gallery, MAX_GALLERY_COLUMNS};
pub use image::{build_serialized_image_block, render_image};
