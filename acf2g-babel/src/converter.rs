//! Layout converter trait definition
//!
//! Every layout kind is handled by one [`LayoutConverter`]. A converter reads the
//! fields of a single layout instance and returns the serialized blocks it
//! produces, concatenated. It may return an empty string when the instance has
//! nothing to show.
//!
//! Converters are registered by kind in a
//! [`ConverterRegistry`](crate::registry::ConverterRegistry). Adding a kind means
//! adding a converter; serialization and markup building stay untouched.

use crate::error::Result;
use crate::layout::{LayoutInstance, LayoutKind};
use crate::store::ImageResolver;

/// Trait for layout converters
///
/// # Examples
///
/// ```ignore
/// struct QuoteConverter;
///
/// impl LayoutConverter for QuoteConverter {
///     fn kind(&self) -> LayoutKind {
///         LayoutKind::Quote
///     }
///
///     fn convert(&self, layout: &LayoutInstance, _: &dyn ImageResolver) -> Result<String> {
///         Block::new("quote", format!("<blockquote>{}</blockquote>", layout.text("quote")))
///             .serialize()
///     }
/// }
/// ```
pub trait LayoutConverter: Send + Sync {
    /// The layout kind this converter handles
    fn kind(&self) -> LayoutKind;

    /// Optional description of the produced blocks
    fn description(&self) -> &str {
        ""
    }

    /// Whether this converter only emits a stub instead of real blocks
    fn is_placeholder(&self) -> bool {
        false
    }

    /// Convert one layout instance into serialized blocks
    fn convert(&self, layout: &LayoutInstance, resolver: &dyn ImageResolver) -> Result<String>;
}
