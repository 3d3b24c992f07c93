use crate::{
    listener::{FieldListener, IndexingListenerFactory},
    model::FieldDescriptor,
    obs::trace::{ResolutionTraceEvent, TraceHandle},
};
use std::{fmt, sync::Arc};

///
/// ListenerFactory
///

pub trait ListenerFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn accepts(&self, field: &FieldDescriptor) -> bool;

    fn construct(&self, field: &FieldDescriptor) -> Arc<dyn FieldListener>;
}

///
/// ListenerFactoryRegistry
///
/// Ordered listener factories. Every accepting factory contributes one
/// listener, in declaration order; an empty result is valid.
///

#[derive(Clone)]
pub struct ListenerFactoryRegistry {
    factories: Vec<Arc<dyn ListenerFactory>>,
    trace: TraceHandle,
}

impl ListenerFactoryRegistry {
    #[must_use]
    pub fn new(factories: Vec<Arc<dyn ListenerFactory>>) -> Self {
        Self {
            factories,
            trace: TraceHandle::disabled(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The built-in catalogue: property indexing into `index`.
    pub fn standard(index: impl Into<String>) -> Self {
        Self::new(vec![Arc::new(IndexingListenerFactory::new(index))])
    }

    #[must_use]
    pub fn with_trace(mut self, trace: TraceHandle) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub fn resolve(&self, field: &FieldDescriptor) -> Vec<Arc<dyn FieldListener>> {
        let listeners: Vec<_> = self
            .factories
            .iter()
            .filter(|factory| factory.accepts(field))
            .map(|factory| factory.construct(field))
            .collect();

        self.trace.emit(|| ResolutionTraceEvent::ListenersResolved {
            field: field.field_ref(),
            listeners: listeners.iter().map(|l| l.name()).collect(),
        });

        listeners
    }

    #[must_use]
    pub fn factory_names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ListenerFactoryRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ListenerFactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerFactoryRegistry")
            .field("factories", &self.factory_names())
            .field("trace", &self.trace)
            .finish()
    }
}
