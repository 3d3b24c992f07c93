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
/// TransientAccessor
/// Excluded from persistence; the instance keeps its in-memory value.
///

#[derive(Debug)]
pub struct TransientAccessor {
    field: FieldRef,
}

impl TransientAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            field: field.field_ref(),
        })
    }
}

impl FieldAccessor for TransientAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::Transient
    }

    fn field(&self) -> &FieldRef {
        &self.field
    }

    fn read(
        &self,
        _store: &dyn GraphStore,
        _owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        Ok(None)
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
