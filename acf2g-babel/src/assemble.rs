//! Document assembly
//!
//! Serialized blocks delimit themselves through their comment markers, so a
//! document body is the plain concatenation of the converted layouts.

use crate::error::Result;
use crate::layout::LayoutInstance;
use crate::registry::ConverterRegistry;
use crate::store::ImageResolver;

/// Convert a record's layouts, in order, into its new document body.
///
/// The first failing layout aborts assembly; no partial body is returned.
pub fn assemble(
    registry: &ConverterRegistry,
    layouts: &[LayoutInstance],
    resolver: &dyn ImageResolver,
) -> Result<String> {
    let mut body = String::new();
    for layout in layouts {
        body.push_str(&registry.convert(layout, resolver)?);
    }
    Ok(body)
}
