//! Collaborator interfaces around the converter
//!
//! The converter itself never touches storage. Records are fetched through a
//! [`RecordSource`], converted, and written back through a [`RecordSink`].
//! Image metadata comes from an [`ImageResolver`]. [`JsonStore`] implements all
//! three over a JSON export of the site so the pipeline can run end to end.

mod json;

pub use json::{Attachment, JsonStore};

use crate::error::{Result, StoreError};
use crate::layout::{ImageRef, LayoutInstance, RecordId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata needed to render an image.
///
/// All fields are plain strings. Sources fill in `""` for anything they do not
/// know when building the value, so rendering never sees a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub src_large: String,
    pub src_full: String,
    pub alt: String,
    pub caption: String,
    pub link: String,
}

impl ImageMetadata {
    /// Build metadata from optional parts, defaulting each to `""`.
    pub fn from_parts(
        src_large: Option<String>,
        src_full: Option<String>,
        alt: Option<String>,
        caption: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            src_large: src_large.unwrap_or_default(),
            src_full: src_full.unwrap_or_default(),
            alt: alt.unwrap_or_default(),
            caption: caption.unwrap_or_default(),
            link: link.unwrap_or_default(),
        }
    }
}

/// Resolves image references to their metadata.
///
/// Resolution is not cached; resolving the same reference twice must give the
/// same metadata as long as the underlying asset is unchanged.
pub trait ImageResolver: Send + Sync {
    fn resolve_image(&self, image: ImageRef) -> Result<ImageMetadata>;
}

/// A stored content record.
///
/// Only the id and type are modelled. Every other key, the content body and
/// the layout list included, is kept as stored so that writing a record back
/// changes nothing but what [`Record::set_content`] replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl Record {
    pub const TITLE: &'static str = "title";
    pub const CONTENT: &'static str = "content";
    pub const LAYOUTS: &'static str = "content_blocks";

    pub fn new(id: RecordId, record_type: impl Into<String>) -> Self {
        Self {
            id,
            record_type: record_type.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style helper to set a stored key.
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn title(&self) -> &str {
        self.string_field(Self::TITLE)
    }

    /// The content body, `""` when absent.
    pub fn content(&self) -> &str {
        self.string_field(Self::CONTENT)
    }

    /// Replace the content body, keeping its position among the stored keys.
    pub fn set_content(&mut self, body: String) {
        self.fields.insert(Self::CONTENT.to_string(), Value::String(body));
    }

    /// Parse the layout list.
    ///
    /// Absent, `null` and `false` (an emptied field) all mean no layouts. A list
    /// that cannot be read fails for this record only.
    pub fn layouts(&self) -> std::result::Result<Vec<LayoutInstance>, StoreError> {
        match self.fields.get(Self::LAYOUTS) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Vec::new()),
            Some(value) => Vec::<LayoutInstance>::deserialize(value).map_err(|e| {
                StoreError::InvalidLayouts {
                    id: self.id,
                    reason: e.to_string(),
                }
            }),
        }
    }

    fn string_field(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Query bounds for [`RecordSource::fetch_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Restrict to this single record. Zero counts as unset.
    pub id: Option<RecordId>,
    pub post_type: Option<String>,
    pub limit: Option<usize>,
}

impl RecordFilter {
    pub const DEFAULT_POST_TYPE: &'static str = "generic-post";
    pub const DEFAULT_LIMIT: usize = 5;

    pub fn by_id(id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_type(post_type: impl Into<String>, limit: usize) -> Self {
        Self {
            id: None,
            post_type: Some(post_type.into()),
            limit: Some(limit),
        }
    }

    /// The single-record restriction, if one is set to a positive id.
    pub fn single_id(&self) -> Option<RecordId> {
        self.id.filter(|id| id.0 > 0)
    }

    pub fn post_type(&self) -> &str {
        self.post_type.as_deref().unwrap_or(Self::DEFAULT_POST_TYPE)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

/// Read access to stored records.
pub trait RecordSource {
    /// Records matching the filter, in store order.
    fn fetch_records(&self, filter: &RecordFilter) -> std::result::Result<Vec<Record>, StoreError>;

    /// Layout instances of a record, empty when it has none.
    fn get_layout_instances(
        &self,
        id: RecordId,
    ) -> std::result::Result<Vec<LayoutInstance>, StoreError>;
}

/// Write access to stored records.
pub trait RecordSink {
    /// Replace the content body of a record.
    fn update_record_content(
        &mut self,
        id: RecordId,
        body: String,
    ) -> std::result::Result<RecordId, StoreError>;
}
