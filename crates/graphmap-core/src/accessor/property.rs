use crate::{
    accessor::{FieldAccessor, expect_variant},
    classify::AccessorCategory,
    convert::ConversionService,
    error::AccessError,
    model::{DeclaredType, FieldDescriptor, FieldRef},
    naming,
    registry::AccessorFactory,
    store::GraphStore,
    value::{ElementRef, Value},
};
use std::sync::Arc;

///
/// PropertyAccessor
/// Natively storable value held under the field's property key.
///

#[derive(Debug)]
pub struct PropertyAccessor {
    field: FieldRef,
    key: String,
    declared: DeclaredType,
}

impl PropertyAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            field: field.field_ref(),
            key: naming::key_for(field),
            declared: field.declared.clone(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn expected(&self) -> String {
        match &self.declared {
            DeclaredType::Scalar(kind) => kind.to_string(),
            DeclaredType::ScalarArray(kind) => format!("[{kind}]"),
            other => format!("{other:?}"),
        }
    }
}

impl FieldAccessor for PropertyAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::Property
    }

    fn field(&self) -> &FieldRef {
        &self.field
    }

    fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        let value = store.property(owner, &self.key)?;

        Ok(Some(value.unwrap_or_default()))
    }

    fn write(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        value: &Value,
    ) -> Result<(), AccessError> {
        if value.is_null() {
            store.remove_property(owner, &self.key)?;
            return Ok(());
        }
        expect_variant(
            &self.field,
            &self.expected(),
            value,
            self.declared.admits(value),
        )?;
        store.set_property(owner, &self.key, value.clone())?;

        Ok(())
    }
}

///
/// ConvertedPropertyAccessor
/// Value stored through the converter registered for its declared type.
/// The converter is looked up on every access.
///

#[derive(Debug)]
pub struct ConvertedPropertyAccessor {
    field: FieldRef,
    key: String,
    ty: String,
    conversions: Arc<ConversionService>,
}

impl ConvertedPropertyAccessor {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FieldAccessor for ConvertedPropertyAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::ConvertedProperty
    }

    fn field(&self) -> &FieldRef {
        &self.field
    }

    fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        match store.property(owner, &self.key)? {
            None | Some(Value::Null) => Ok(Some(Value::Null)),
            Some(stored) => {
                let converter = self.conversions.require(&self.ty)?;

                Ok(Some(converter.from_stored(&stored)?))
            }
        }
    }

    fn write(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        value: &Value,
    ) -> Result<(), AccessError> {
        if value.is_null() {
            store.remove_property(owner, &self.key)?;
            return Ok(());
        }
        let stored = self.conversions.require(&self.ty)?.to_stored(value)?;
        store.set_property(owner, &self.key, stored)?;

        Ok(())
    }
}

///
/// ConvertedPropertyFactory
///
/// Accepts converted properties whose declared type has a registered
/// converter. A converted field without one matches no factory and is
/// reported as unmappable.
///

#[derive(Clone, Debug)]
pub struct ConvertedPropertyFactory {
    conversions: Arc<ConversionService>,
}

impl ConvertedPropertyFactory {
    #[must_use]
    pub const fn new(conversions: Arc<ConversionService>) -> Self {
        Self { conversions }
    }
}

impl AccessorFactory for ConvertedPropertyFactory {
    fn name(&self) -> &'static str {
        "converted_property"
    }

    fn category(&self) -> AccessorCategory {
        AccessorCategory::ConvertedProperty
    }

    fn accepts(&self, field: &FieldDescriptor) -> bool {
        match &field.declared {
            DeclaredType::Converted(ty) => self.conversions.supports(ty),
            _ => false,
        }
    }

    fn construct(&self, field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        let ty = match &field.declared {
            DeclaredType::Converted(ty) => ty.clone(),
            other => format!("{other:?}"),
        };

        Arc::new(ConvertedPropertyAccessor {
            field: field.field_ref(),
            key: naming::key_for(field),
            ty,
            conversions: Arc::clone(&self.conversions),
        })
    }
}
