use crate::{
    accessor::FieldAccessor,
    classify::AccessorCategory,
    error::AccessError,
    model::{FieldDescriptor, FieldRef},
    store::GraphStore,
    value::{ElementRef, Value},
};
use std::sync::Arc;

///
/// IdentityAccessor
///
/// The identity of an entity is the id of its backing element. Writes are
/// accepted and ignored: ids are assigned by the store, never by the field.
///

#[derive(Debug)]
pub struct IdentityAccessor {
    field: FieldRef,
}

impl IdentityAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            field: field.field_ref(),
        })
    }
}

impl FieldAccessor for IdentityAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::Identity
    }

    fn field(&self) -> &FieldRef {
        &self.field
    }

    fn read(
        &self,
        _store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        Ok(Some(Value::Uint(owner.raw_id())))
    }

    fn write(
        &self,
        _store: &mut dyn GraphStore,
        _owner: ElementRef,
        _value: &Value,
    ) -> Result<(), AccessError> {
        Ok(())
    }
}
