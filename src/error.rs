//! Error types shared by the builder state and its components.
//!
//! Most mutations on a missing field id are harmless no-ops and never show up
//! here. What remains are caller mistakes: bad indices, unknown ids handed to
//! the selection, property edits that don't fit the field's kind, and reading
//! the preview context outside of its provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BuilderError {
    /// A reorder index fell outside the field list
    #[error("Index {index} is out of range for a list of {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    /// The id does not belong to any field in the list
    #[error("Unknown field: {id}")]
    UnknownField { id: String },

    /// Seeded field list carried the same id twice
    #[error("Duplicate field id: {id}")]
    DuplicateField { id: String },

    /// Field type identifier outside the fixed set
    #[error("Unknown field type: {name}")]
    UnknownFieldType { name: String },

    /// A property edit that only applies to another kind of field
    #[error("Property '{property}' does not apply to {kind} fields")]
    PropertyMismatch { property: String, kind: String },

    /// Replacement properties or a value shaped for a different kind than the field
    #[error("Cannot give {actual} to a {expected} field")]
    KindMismatch { expected: String, actual: String },

    /// `use_preview` was called outside of a `PreviewProvider`
    #[error("use_preview must be used within a PreviewProvider")]
    MissingPreviewProvider,

    /// `use_drag` was called outside of a `DndProvider`
    #[error("use_drag must be used within a DndProvider")]
    MissingDragProvider,
}

impl BuilderError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        BuilderError::IndexOutOfRange { index, len }
    }

    pub fn unknown_field(id: impl Into<String>) -> Self {
        BuilderError::UnknownField { id: id.into() }
    }

    pub fn property_mismatch(property: impl Into<String>, kind: impl Into<String>) -> Self {
        BuilderError::PropertyMismatch {
            property: property.into(),
            kind: kind.into(),
        }
    }

    pub fn kind_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        BuilderError::KindMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Programming errors that should never be swallowed by the UI
    pub fn is_context_misuse(&self) -> bool {
        matches!(
            self,
            BuilderError::MissingPreviewProvider | BuilderError::MissingDragProvider
        )
    }
}
