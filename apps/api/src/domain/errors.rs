use thiserror::Error;

use super::item::ItemField;

/// Discriminant of a [`DataError`]
///
/// Callers branch on this rather than on error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Serialization,
    TransientStore,
}

/// Errors surfaced by the item data-access layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("missing required field: {field}")]
    Validation { field: ItemField },

    #[error("item not found: {name}")]
    NotFound { name: String },

    #[error("stored item could not be decoded: {0}")]
    Serialization(String),

    #[error("store request failed: {0}")]
    TransientStore(String),
}

impl DataError {
    pub fn validation(field: ItemField) -> Self {
        Self::Validation { field }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::Validation { .. } => ErrorKind::Validation,
            DataError::NotFound { .. } => ErrorKind::NotFound,
            DataError::Serialization(_) => ErrorKind::Serialization,
            DataError::TransientStore(_) => ErrorKind::TransientStore,
        }
    }
}

pub type DataResult<T> = Result<T, DataError>;
