//! Flexible-content layouts to editor blocks
//!
//!     This crate converts records whose content is stored as a list of flexible-content layouts
//!     (text blocks, image sets, full width images, ...) into the comment-delimited block markup
//!     the block editor stores as post content.
//!
//!     This is a pure lib, that is, it powers the acf2g cli but is shell agnostic: no code here
//!     reads files, prints or looks at the environment. Storage and image metadata come in
//!     through the collaborator traits in ./store.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── layout.rs               # Input model: layout instances, kinds, field values
//!     ├── block.rs                # Block serializer
//!     ├── markup                  # Image and gallery markup builders
//!     ├── converter.rs            # LayoutConverter trait definition
//!     ├── converters              # One converter per layout kind
//!     ├── registry.rs             # ConverterRegistry, the kind dispatch table
//!     ├── assemble.rs             # Document assembler
//!     ├── store                   # Collaborator traits + JSON backed store
//!     ├── batch.rs                # Batch conversion with per record failure handling
//!     └── analysis.rs             # Layout usage report
//!
//! Conversion Pipeline
//!
//!     record layouts ─► registry (dispatch on kind) ─► converter ─► markup builders ─► block
//!     serializer ─► assembler joins the blocks ─► batch driver saves the body
//!
//!     Every step before saving is a pure function of the layouts and the resolved image
//!     metadata, so converting the same record twice gives byte identical output.
//!
//! Layout Kinds
//!
//!     The set of kinds is closed (see [`LayoutKind`]). A stored kind outside that set is an
//!     error for the record it appears in, never silently skipped, since dropping a layout would
//!     lose content without a trace. Some kinds only produce a stub for now, see ./converters.
//!
//! Errors
//!
//!     Conversion errors abort the current record only. The batch driver reports them per record
//!     and moves on to the next one.
pub mod analysis;
pub mod assemble;
pub mod batch;
pub mod block;
pub mod converter;
pub mod converters;
pub mod error;
pub mod layout;
pub mod markup;
pub mod registry;
pub mod store;

pub use assemble::assemble;
pub use block::{Attributes, Block};
pub use converter::LayoutConverter;
pub use error::{ConvertError, StoreError};
pub use layout::{FieldValue, ImageRef, LayoutInstance, LayoutKind, RecordId};
pub use registry::ConverterRegistry;
pub use store::{ImageMetadata, ImageResolver, JsonStore, RecordFilter, RecordSink, RecordSource};

/// Convert an ordered list of layouts with the default converters.
///
/// Shorthand for [`assemble`] over [`ConverterRegistry::with_defaults`].
pub fn convert_layouts(
    layouts: &[LayoutInstance],
    resolver: &dyn ImageResolver,
) -> error::Result<String> {
    assemble(&ConverterRegistry::with_defaults(), layouts, resolver)
}
