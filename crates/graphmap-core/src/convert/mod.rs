//! Value conversion for converted stored properties.
//!
//! A converted property is a field whose declared type cannot be stored
//! natively. The [`ConversionService`] maps declared type names to
//! converters; a converted field is only mappable when its type has one.


use crate::{error::ConversionError, value::Value};
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// ValueConverter
///

pub trait ValueConverter: Send + Sync {
    /// Field value to the representation held by the store.
    fn to_stored(&self, value: &Value) -> Result<Value, ConversionError>;

    /// Stored representation back to the field value.
    fn from_stored(&self, stored: &Value) -> Result<Value, ConversionError>;
}

///
/// FnConverter
/// Converter assembled from a pair of plain functions.
///

pub struct FnConverter {
    to_stored: fn(&Value) -> Result<Value, ConversionError>,
    from_stored: fn(&Value) -> Result<Value, ConversionError>,
}

impl FnConverter {
    #[must_use]
    pub const fn new(
        to_stored: fn(&Value) -> Result<Value, ConversionError>,
        from_stored: fn(&Value) -> Result<Value, ConversionError>,
    ) -> Self {
        Self {
            to_stored,
            from_stored,
        }
    }
}

impl ValueConverter for FnConverter {
    fn to_stored(&self, value: &Value) -> Result<Value, ConversionError> {
        (self.to_stored)(value)
    }

    fn from_stored(&self, stored: &Value) -> Result<Value, ConversionError> {
        (self.from_stored)(stored)
    }
}

///
/// ConversionService
///

#[derive(Clone, Default)]
pub struct ConversionService {
    converters: BTreeMap<String, Arc<dyn ValueConverter>>,
}

impl ConversionService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter for a declared type name; replaces any previous one.
    #[must_use]
    pub fn with(mut self, ty: impl Into<String>, converter: impl ValueConverter + 'static) -> Self {
        self.register(ty, converter);
        self
    }

    pub fn register(&mut self, ty: impl Into<String>, converter: impl ValueConverter + 'static) {
        self.converters.insert(ty.into(), Arc::new(converter));
    }

    #[must_use]
    pub fn supports(&self, ty: &str) -> bool {
        self.converters.contains_key(ty)
    }

    #[must_use]
    pub fn get(&self, ty: &str) -> Option<Arc<dyn ValueConverter>> {
        self.converters.get(ty).cloned()
    }

    /// Converter for `ty`, or a `MissingConverter` error.
    pub fn require(&self, ty: &str) -> Result<Arc<dyn ValueConverter>, ConversionError> {
        self.get(ty).ok_or_else(|| ConversionError::MissingConverter { ty: ty.to_string() })
    }
}

impl fmt::Debug for ConversionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionService")
            .field("types", &self.converters.keys().collect::<Vec<_>>())
            .finish()
    }
}
