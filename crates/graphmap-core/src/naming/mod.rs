//! Stored property keys.
//!
//! Qualified keys (`<OwningSimpleTypeName>.<fieldName>`) keep types that share
//! field names apart when they store into one property space. Short keys are
//! the bare field name and rely on the caller to guarantee uniqueness.


use crate::model::{FieldDescriptor, NamingMode};

/// Property key for a field under its owning type's naming mode.
#[must_use]
pub fn key_for(field: &FieldDescriptor) -> String {
    match field.owner.naming_mode() {
        NamingMode::Short => field.name.clone(),
        NamingMode::Qualified => format!("{}.{}", field.owner.simple_name(), field.name),
    }
}
