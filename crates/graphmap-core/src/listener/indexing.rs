use crate::{
    classify,
    error::AccessError,
    listener::FieldListener,
    model::{FieldDescriptor, FieldRef},
    naming,
    registry::ListenerFactory,
    store::GraphStore,
    value::{ElementRef, Value},
};
use std::sync::Arc;

/// Index used when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "node";

///
/// IndexingListener
/// Keeps `(index, property key, value) -> owner` current for an indexed property.
///

#[derive(Debug)]
pub struct IndexingListener {
    field: FieldRef,
    index: String,
    key: String,
}

impl IndexingListener {
    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FieldListener for IndexingListener {
    fn name(&self) -> &'static str {
        "indexing"
    }

    fn field(&self) -> &FieldRef {
        &self.field
    }

    fn value_changed(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        old: Option<&Value>,
        new: &Value,
    ) -> Result<(), AccessError> {
        if let Some(old) = old.filter(|v| !v.is_null()) {
            store.index_remove(&self.index, &self.key, old, owner)?;
        }
        if !new.is_null() {
            store.index_add(&self.index, &self.key, new, owner)?;
        }

        Ok(())
    }
}

///
/// IndexingListenerFactory
///
/// Accepts stored properties (scalar or converted) carrying the `indexed`
/// annotation. Identity and transient fields are never indexed.
///

#[derive(Clone, Debug)]
pub struct IndexingListenerFactory {
    index: String,
}

impl IndexingListenerFactory {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }
}

impl Default for IndexingListenerFactory {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME)
    }
}

impl ListenerFactory for IndexingListenerFactory {
    fn name(&self) -> &'static str {
        "indexing"
    }

    fn accepts(&self, field: &FieldDescriptor) -> bool {
        field.annotations.indexed
            && !classify::is_identity_field(field)
            && !classify::is_transient_field(field)
            && (classify::is_property_field(field) || classify::is_converted_property_field(field))
    }

    fn construct(&self, field: &FieldDescriptor) -> Arc<dyn FieldListener> {
        Arc::new(IndexingListener {
            field: field.field_ref(),
            index: self.index.clone(),
            key: naming::key_for(field),
        })
    }
}
