use crate::{
    accessor::FieldAccessor,
    classify::AccessorCategory,
    error::AccessError,
    listener::FieldListener,
    model::FieldRef,
    store::GraphStore,
    value::{ElementRef, Value},
};
use std::{collections::BTreeMap, ops::Index, sync::Arc};

///
/// FieldBinding
/// Resolved accessor and listeners for one field.
///

#[derive(Clone, Debug)]
pub struct FieldBinding {
    key: String,
    accessor: Arc<dyn FieldAccessor>,
    listeners: Vec<Arc<dyn FieldListener>>,
}

impl FieldBinding {
    pub(crate) fn new(
        key: String,
        accessor: Arc<dyn FieldAccessor>,
        listeners: Vec<Arc<dyn FieldListener>>,
    ) -> Self {
        Self {
            key,
            accessor,
            listeners,
        }
    }

    /// Property key the field maps to under its owner's naming mode.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn field(&self) -> &FieldRef {
        self.accessor.field()
    }

    #[must_use]
    pub fn category(&self) -> AccessorCategory {
        self.accessor.category()
    }

    #[must_use]
    pub fn accessor(&self) -> &Arc<dyn FieldAccessor> {
        &self.accessor
    }

    #[must_use]
    pub fn listeners(&self) -> &[Arc<dyn FieldListener>] {
        &self.listeners
    }

    pub fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        self.accessor.read(store, owner)
    }

    /// Write through the accessor, then notify every listener in order.
    ///
    /// The previous value is only read when a listener needs it. A listener
    /// failure is returned as that listener's error; the write stays applied
    /// and later listeners are not run.
    pub fn write(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        value: &Value,
    ) -> Result<(), AccessError> {
        let old = if self.listeners.is_empty() {
            None
        } else {
            self.accessor.read(store, owner)?
        };

        self.accessor.write(store, owner, value)?;

        for listener in &self.listeners {
            listener
                .value_changed(store, owner, old.as_ref(), value)
                .map_err(|source| AccessError::Listener {
                    listener: listener.name(),
                    field: self.accessor.field().clone(),
                    source: Box::new(source),
                })?;
        }

        Ok(())
    }
}

///
/// TypeBindings
/// Bindings for every non-synthetic field of one owning type, by field name.
///

#[derive(Clone, Debug, Default)]
pub struct TypeBindings {
    fields: BTreeMap<String, FieldBinding>,
}

impl TypeBindings {
    pub(crate) fn insert(&mut self, field: String, binding: FieldBinding) {
        self.fields.insert(field, binding);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldBinding> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldBinding)> {
        self.fields.iter().map(|(name, binding)| (name.as_str(), binding))
    }
}

impl Index<&str> for TypeBindings {
    type Output = FieldBinding;

    /// Panics when the field has no binding.
    fn index(&self, field: &str) -> &Self::Output {
        &self.fields[field]
    }
}
