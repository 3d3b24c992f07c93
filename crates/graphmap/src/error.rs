use derive_more::Display;
use graphmap_config::ConfigError;
use graphmap_core::error::{AccessError, ConversionError, StoreError, UnmappableFieldError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<UnmappableFieldError> for Error {
    fn from(err: UnmappableFieldError) -> Self {
        Self::new(
            ErrorKind::Mapping(MappingErrorKind::Unmappable),
            ErrorOrigin::Resolution,
            err.to_string(),
        )
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        let kind = match err {
            StoreError::NotFound { .. } => StoreErrorKind::NotFound,
            StoreError::Backend(_) => StoreErrorKind::Unavailable,
        };

        Self::new(ErrorKind::Store(kind), ErrorOrigin::Store, err.to_string())
    }
}

impl From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        let kind = match err {
            ConversionError::MissingConverter { .. } => AccessErrorKind::MissingConverter,
            ConversionError::Invalid { .. } => AccessErrorKind::Conversion,
        };

        Self::new(ErrorKind::Access(kind), ErrorOrigin::Conversion, err.to_string())
    }
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        let message = err.to_string();
        let (kind, origin) = match err {
            AccessError::Store(inner) => return inner.into(),
            AccessError::Conversion(inner) => return inner.into(),
            AccessError::Listener { .. } => (AccessErrorKind::Listener, ErrorOrigin::Listener),
            AccessError::ReadOnly { .. } => (AccessErrorKind::ReadOnly, ErrorOrigin::Accessor),
            AccessError::TypeMismatch { .. } => {
                (AccessErrorKind::TypeMismatch, ErrorOrigin::Accessor)
            }
            AccessError::Cardinality { .. } => {
                (AccessErrorKind::Cardinality, ErrorOrigin::Accessor)
            }
            AccessError::NotNodeBacked { .. } => {
                (AccessErrorKind::NotNodeBacked, ErrorOrigin::Accessor)
            }
        };

        Self::new(ErrorKind::Access(kind), origin, message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Mapping(MappingErrorKind),
    Access(AccessErrorKind),
    Store(StoreErrorKind),

    /// Configuration could not be read, parsed or validated.
    Config,
}

///
/// MappingErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MappingErrorKind {
    /// A field matched no accessor strategy. The declaration must change.
    Unmappable,
}

///
/// AccessErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AccessErrorKind {
    /// Write attempted through a read-only strategy.
    ReadOnly,

    /// Value shape does not fit the field.
    TypeMismatch,

    /// Single relationship found more than one related node.
    Cardinality,

    /// Relationship field accessed on a relationship-backed owner.
    NotNodeBacked,

    MissingConverter,
    Conversion,

    /// Write committed, but a listener failed afterwards.
    Listener,
}

///
/// StoreErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StoreErrorKind {
    NotFound,
    Unavailable,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Accessor,
    Config,
    Conversion,
    Listener,
    Resolution,
    Store,
}
