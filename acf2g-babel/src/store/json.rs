//! In-memory store backed by a JSON site export
//!
//! ```json
//! {
//!   "posts": [
//!     { "id": 1, "type": "post", "title": "Hello", "content": "",
//!       "content_blocks": [{ "acf_fc_layout": "text_block", "title": "Hi", "text": "" }] }
//!   ],
//!   "attachments": [
//!     { "id": 7, "src_large": "/l.jpg", "src_full": "/f.jpg", "alt": "", "caption": "", "link": "/?p=7" }
//!   ]
//! }
//! ```
//!
//! Parsing and writing the document is left to the caller; this type only
//! works on strings so the library stays free of file system access.

use super::{ImageMetadata, ImageResolver, Record, RecordFilter, RecordSink, RecordSource};
use crate::error::{ConvertError, Result, StoreError};
use crate::layout::{ImageRef, LayoutInstance, RecordId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An image asset as exported from the media library.
///
/// Keys are kept as stored; missing or non-string metadata reads as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: ImageRef,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl Attachment {
    pub fn metadata(&self) -> ImageMetadata {
        ImageMetadata::from_parts(
            self.string_field("src_large"),
            self.string_field("src_full"),
            self.string_field("alt"),
            self.string_field("caption"),
            self.string_field("link"),
        )
    }

    fn string_field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// A site export: posts, their attachments, and whatever else the export
/// carries, written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonStore {
    #[serde(default)]
    pub posts: Vec<Record>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl JsonStore {
    pub fn from_json(source: &str) -> std::result::Result<Self, StoreError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self, pretty: bool) -> std::result::Result<String, StoreError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.posts.iter().find(|post| post.id == id)
    }
}

impl RecordSource for JsonStore {
    fn fetch_records(&self, filter: &RecordFilter) -> std::result::Result<Vec<Record>, StoreError> {
        if let Some(id) = filter.single_id() {
            return Ok(self.record(id).into_iter().cloned().collect());
        }

        let post_type = filter.post_type();
        Ok(self
            .posts
            .iter()
            .filter(|post| post.record_type == post_type)
            .take(filter.limit())
            .cloned()
            .collect())
    }

    fn get_layout_instances(
        &self,
        id: RecordId,
    ) -> std::result::Result<Vec<LayoutInstance>, StoreError> {
        let record = self.record(id).ok_or(StoreError::RecordNotFound(id))?;
        record.layouts()
    }
}

impl RecordSink for JsonStore {
    fn update_record_content(
        &mut self,
        id: RecordId,
        body: String,
    ) -> std::result::Result<RecordId, StoreError> {
        let record = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;
        record.set_content(body);
        Ok(id)
    }
}

impl ImageResolver for JsonStore {
    fn resolve_image(&self, image: ImageRef) -> Result<ImageMetadata> {
        self.attachments
            .iter()
            .find(|attachment| attachment.id == image)
            .map(Attachment::metadata)
            .ok_or_else(|| ConvertError::ImageResolution {
                image,
                reason: "no such attachment".to_string(),
            })
    }
}
