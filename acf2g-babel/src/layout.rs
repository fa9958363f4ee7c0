//! Input data model: layout instances and their field bags
//!
//! A record's flexible content is stored as an ordered list of layout
//! instances. Each instance carries its kind under `acf_fc_layout` and the
//! remaining keys are the fields of that kind:
//!
//! ```json
//! { "acf_fc_layout": "text_block", "title": "Hello", "text": "<p>World</p>" }
//! { "acf_fc_layout": "image_full_width_block", "image": 12 }
//! { "acf_fc_layout": "image_block", "image_set": [{ "image": 3 }, { "image": 4 }] }
//! ```
//!
//! The kind is kept as the raw stored string; [`LayoutInstance::kind`] parses it
//! into the closed [`LayoutKind`] enum so unknown kinds become a checked error.

use crate::error::ConvertError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Identifier of a content record in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to an image asset, resolved through an
/// [`ImageResolver`](crate::store::ImageResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub u64);

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The known layout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Text,
    Image,
    ImageFullWidth,
    Video,
    PostList,
    ImageAndText,
    MeasurementTable,
    Box,
}

impl LayoutKind {
    /// Every known kind, in the order usage reports list them.
    pub const ALL: [LayoutKind; 8] = [
        LayoutKind::MeasurementTable,
        LayoutKind::Box,
        LayoutKind::PostList,
        LayoutKind::Text,
        LayoutKind::Image,
        LayoutKind::ImageFullWidth,
        LayoutKind::ImageAndText,
        LayoutKind::Video,
    ];

    /// The name this kind is stored under.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutKind::Text => "text_block",
            LayoutKind::Image => "image_block",
            LayoutKind::ImageFullWidth => "image_full_width_block",
            LayoutKind::Video => "video_block",
            LayoutKind::PostList => "post_list_block",
            LayoutKind::ImageAndText => "image_and_text_block",
            LayoutKind::MeasurementTable => "measurement_table_block",
            LayoutKind::Box => "box_block",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConvertError::UnknownLayoutKind(s.to_string()))
    }
}

/// One entry of an `image_set` field. Sub-fields other than the image are
/// carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSetEntry {
    pub image: ImageRef,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Value of a single layout field.
///
/// The field plugin writes `null` or `false` for fields that were never filled
/// in; both deserialize to an empty value and read as absent.
///
/// Field shapes no converter reads (repeaters, groups, numbers with a fraction)
/// land in `Other` and are kept as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Image(ImageRef),
    Text(String),
    ImageSet(Vec<ImageSetEntry>),
    Flag(bool),
    Empty,
    Other(Value),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<ImageRef> for FieldValue {
    fn from(value: ImageRef) -> Self {
        FieldValue::Image(value)
    }
}

impl From<Vec<ImageRef>> for FieldValue {
    fn from(images: Vec<ImageRef>) -> Self {
        FieldValue::ImageSet(
            images
                .into_iter()
                .map(|image| ImageSetEntry {
                    image,
                    extra: IndexMap::new(),
                })
                .collect(),
        )
    }
}

/// A single flexible-content entry of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInstance {
    #[serde(rename = "acf_fc_layout")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
}

impl LayoutInstance {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style helper to set a field.
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Parse the stored kind.
    pub fn kind(&self) -> Result<LayoutKind, ConvertError> {
        self.kind.parse()
    }

    /// Text content of a field. Absent, empty and non-text fields read as `""`.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Image reference held by a field, if any.
    pub fn image(&self, name: &str) -> Option<ImageRef> {
        match self.fields.get(name) {
            Some(FieldValue::Image(image)) => Some(*image),
            _ => None,
        }
    }

    /// References held by an image-set field, in stored order.
    ///
    /// Absent or empty sets yield an empty list.
    pub fn image_set(&self, name: &str) -> Vec<ImageRef> {
        match self.fields.get(name) {
            Some(FieldValue::ImageSet(entries)) => entries.iter().map(|e| e.image).collect(),
            _ => Vec::new(),
        }
    }
}
