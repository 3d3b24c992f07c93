use crate::model::FieldRef;
use std::fmt;
use thiserror::Error as ThisError;

///
/// UnmappableFieldError
///
/// No accessor classifier accepted a non-synthetic field. This is a mapping
/// declaration defect: it is deterministic, never retried, and halts
/// initialization of the owning type.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("no field accessor configured for field '{field}' of type '{owner}'")]
pub struct UnmappableFieldError {
    pub owner: String,
    pub field: String,
}

impl UnmappableFieldError {
    pub fn new(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            field: field.into(),
        }
    }
}

impl From<FieldRef> for UnmappableFieldError {
    fn from(field: FieldRef) -> Self {
        Self::new(field.owner, field.field)
    }
}

///
/// AccessError
/// Failure raised by an accessor strategy or listener while touching the store.
///

#[derive(Debug, ThisError)]
pub enum AccessError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("field {field} is read-only")]
    ReadOnly { field: FieldRef },

    #[error("field {field} expects {expected}, found {found}")]
    TypeMismatch {
        field: FieldRef,
        expected: String,
        found: &'static str,
    },

    #[error("field {field} maps a single relationship but {found} were found")]
    Cardinality { field: FieldRef, found: usize },

    #[error("field {field} requires a node-backed owner, got {owner}")]
    NotNodeBacked { field: FieldRef, owner: String },

    #[error("listener '{listener}' failed for field {field}: {source}")]
    Listener {
        listener: &'static str,
        field: FieldRef,
        source: Box<Self>,
    },
}

impl AccessError {
    pub(crate) fn type_mismatch(
        field: FieldRef,
        expected: impl fmt::Display,
        found: &crate::value::Value,
    ) -> Self {
        Self::TypeMismatch {
            field,
            expected: expected.to_string(),
            found: found.label(),
        }
    }
}

///
/// ConversionError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ConversionError {
    #[error("no converter registered for type '{ty}'")]
    MissingConverter { ty: String },

    #[error("cannot convert {found} for type '{ty}': {message}")]
    Invalid {
        ty: String,
        found: &'static str,
        message: String,
    },
}

///
/// StoreError
/// Failure reported by a `GraphStore` implementation.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("element not found: {element}")]
    NotFound { element: String },

    #[error("store backend error: {0}")]
    Backend(String),
}
