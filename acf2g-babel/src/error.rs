//! Error types for conversion and store operations

use crate::layout::{ImageRef, LayoutKind, RecordId};
use thiserror::Error;

/// Result alias used throughout the conversion pipeline.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors raised while converting a record's layouts into blocks.
///
/// Any of these aborts the conversion of the current record. The batch driver
/// catches them per record, so one bad record never stops a batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The stored layout kind is not one the converter knows about
    #[error("Unknown layout kind '{0}'")]
    UnknownLayoutKind(String),

    /// The kind is known but the registry in use has no converter for it
    #[error("No converter registered for layout kind '{0}'")]
    ConverterNotRegistered(LayoutKind),

    /// The image resolver could not produce metadata for a reference
    #[error("Could not resolve image {image}: {reason}")]
    ImageResolution { image: ImageRef, reason: String },

    /// A field the layout kind cannot do without is absent or empty
    #[error("Layout '{kind}' is missing required field '{field}'")]
    MissingField { kind: LayoutKind, field: String },

    /// A gallery was requested for an empty list of images
    #[error("A gallery needs at least one image")]
    EmptyGallery,

    /// Block attributes could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Failure reported by the record store
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors reported by record store collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No record with this id exists in the store
    #[error("Record {0} not found")]
    RecordNotFound(RecordId),

    /// The store document could not be read
    #[error("Invalid store document: {0}")]
    Parse(String),

    /// The layout list of a single record could not be read
    #[error("Record {id} has unreadable layouts: {reason}")]
    InvalidLayouts { id: RecordId, reason: String },

    /// Writing the new content body failed
    #[error("Could not update record: {0}")]
    Persistence(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err.to_string())
    }
}
