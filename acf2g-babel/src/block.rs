//! Block serialization
//!
//! A block is written as an HTML comment header carrying the block name and
//! its JSON attributes, the inner markup, and a matching closing comment:
//!
//! ```text
//! <!-- wp:image {"id":7,"sizeSlug":"large"} --><figure>…</figure><!-- /wp:image -->
//! <!-- wp:paragraph --><p>x</p><!-- /wp:paragraph -->
//! ```
//!
//! The `core/` namespace is implied and dropped from the comment. Blocks
//! without inner markup are written self-closing (`<!-- wp:spacer /-->`).
//!
//! Attribute JSON is escaped so it cannot close the comment or be mistaken for
//! markup: `--`, `<`, `>`, `&` and escaped quotes are replaced with their
//! unicode escapes. The JSON stays valid and decodes to the same values.

use crate::error::{ConvertError, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Insertion-ordered block attributes.
pub type Attributes = IndexMap<String, Value>;

const CORE_NAMESPACE: &str = "core/";

/// A block ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block type name, e.g. `image` or `core/image`
    pub name: String,
    pub attrs: Attributes,
    pub inner_html: String,
    /// Fragments joined to form the serialized body; a single fragment equal
    /// to `inner_html` for every block built here
    pub inner_content: Vec<String>,
}

impl Block {
    pub fn new(name: impl Into<String>, inner_html: impl Into<String>) -> Self {
        let inner_html = inner_html.into();
        Self {
            name: name.into(),
            attrs: Attributes::new(),
            inner_content: vec![inner_html.clone()],
            inner_html,
        }
    }

    /// Builder-style helper to append an attribute.
    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn serialize(&self) -> Result<String> {
        serialize(&self.name, &self.attrs, &self.inner_content.concat())
    }
}

/// Serialize a block from its parts.
pub fn serialize(name: &str, attrs: &Attributes, inner_html: &str) -> Result<String> {
    let name = name.strip_prefix(CORE_NAMESPACE).unwrap_or(name);
    let attrs = if attrs.is_empty() {
        String::new()
    } else {
        format!("{} ", serialize_attributes(attrs)?)
    };

    if inner_html.is_empty() {
        return Ok(format!("<!-- wp:{name} {attrs}/-->"));
    }

    Ok(format!(
        "<!-- wp:{name} {attrs}-->{inner_html}<!-- /wp:{name} -->"
    ))
}

/// Encode attributes as comment-safe JSON.
pub fn serialize_attributes(attrs: &Attributes) -> Result<String> {
    let json =
        serde_json::to_string(attrs).map_err(|e| ConvertError::Serialization(e.to_string()))?;

    Ok(json
        .replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace("\\\"", "\\u0022"))
}
