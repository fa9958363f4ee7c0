//! Converter registry: the layout kind dispatch table
//!
//! This module maps every [`LayoutKind`] to the converter that handles it.
//! Stored kinds are parsed before lookup, so an unrecognised kind is reported
//! as [`ConvertError::UnknownLayoutKind`] instead of being skipped.

use crate::converter::LayoutConverter;
use crate::converters::{
    ImageBlockConverter, ImageFullWidthConverter, PlaceholderConverter, TextBlockConverter,
};
use crate::error::{ConvertError, Result};
use crate::layout::{LayoutInstance, LayoutKind};
use crate::store::ImageResolver;
use std::collections::HashMap;

/// Registry of layout converters
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::with_defaults();
/// let layout = LayoutInstance::new("text_block").with_field("title", "Hi");
/// let html = registry.convert(&layout, &store)?;
/// ```
pub struct ConverterRegistry {
    converters: HashMap<LayoutKind, Box<dyn LayoutConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter for the same kind already exists, it will be replaced.
    pub fn register<C: LayoutConverter + 'static>(&mut self, converter: C) {
        self.converters.insert(converter.kind(), Box::new(converter));
    }

    /// Get the converter for a kind
    pub fn get(&self, kind: LayoutKind) -> Result<&dyn LayoutConverter> {
        self.converters
            .get(&kind)
            .map(|c| c.as_ref())
            .ok_or(ConvertError::ConverterNotRegistered(kind))
    }

    /// Check if a kind has a converter
    pub fn has(&self, kind: LayoutKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Registered kinds, in report order
    pub fn list_kinds(&self) -> Vec<LayoutKind> {
        LayoutKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    /// Convert a single layout instance by dispatching on its kind
    pub fn convert(&self, layout: &LayoutInstance, resolver: &dyn ImageResolver) -> Result<String> {
        let kind = layout.kind()?;
        let converter = self.get(kind)?;
        log::debug!("converting {kind} layout");
        converter.convert(layout, resolver)
    }

    /// Create a registry with a converter for every known kind
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(TextBlockConverter);
        registry.register(ImageBlockConverter);
        registry.register(ImageFullWidthConverter);
        for kind in [
            LayoutKind::Video,
            LayoutKind::PostList,
            LayoutKind::ImageAndText,
            LayoutKind::MeasurementTable,
            LayoutKind::Box,
        ] {
            registry.register(PlaceholderConverter::new(kind));
        }

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
