use crate::{
    accessor::{
        COLLECTION_RELATIONSHIP_FACTORY, ConvertedPropertyFactory, FieldAccessor,
        IDENTITY_FACTORY, PROPERTY_FACTORY, READ_ONLY_COLLECTION_RELATIONSHIP_FACTORY,
        RELATIONSHIP_ENTITY_COLLECTION_FACTORY, SINGLE_RELATIONSHIP_FACTORY, TRANSIENT_FACTORY,
    },
    classify::AccessorCategory,
    convert::ConversionService,
    error::UnmappableFieldError,
    model::FieldDescriptor,
    obs::trace::{ResolutionTraceEvent, TraceHandle},
};
use std::{fmt, sync::Arc};

///
/// AccessorFactory
/// Classifier plus constructor for one accessor strategy.
///

pub trait AccessorFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn category(&self) -> AccessorCategory;

    fn accepts(&self, field: &FieldDescriptor) -> bool {
        self.category().accepts(field)
    }

    fn construct(&self, field: &FieldDescriptor) -> Arc<dyn FieldAccessor>;
}

///
/// AccessorFactoryRegistry
///
/// Ordered accessor factories. Resolution scans in declaration order and the
/// first accepting factory wins; no match is an `UnmappableFieldError`.
///

#[derive(Clone)]
pub struct AccessorFactoryRegistry {
    factories: Vec<Arc<dyn AccessorFactory>>,
    trace: TraceHandle,
}

impl AccessorFactoryRegistry {
    #[must_use]
    pub fn new(factories: Vec<Arc<dyn AccessorFactory>>) -> Self {
        Self {
            factories,
            trace: TraceHandle::disabled(),
        }
    }

    /// The built-in catalogue, one factory per category in priority order.
    #[must_use]
    pub fn standard(conversions: Arc<ConversionService>) -> Self {
        Self::new(vec![
            Arc::new(IDENTITY_FACTORY),
            Arc::new(TRANSIENT_FACTORY),
            Arc::new(PROPERTY_FACTORY),
            Arc::new(ConvertedPropertyFactory::new(conversions)),
            Arc::new(SINGLE_RELATIONSHIP_FACTORY),
            Arc::new(COLLECTION_RELATIONSHIP_FACTORY),
            Arc::new(READ_ONLY_COLLECTION_RELATIONSHIP_FACTORY),
            Arc::new(RELATIONSHIP_ENTITY_COLLECTION_FACTORY),
        ])
    }

    #[must_use]
    pub fn with_trace(mut self, trace: TraceHandle) -> Self {
        self.trace = trace;
        self
    }

    /// First factory accepting the field, without constructing anything.
    #[must_use]
    pub fn factory_for(&self, field: &FieldDescriptor) -> Option<&dyn AccessorFactory> {
        self.factories
            .iter()
            .map(AsRef::as_ref)
            .find(|factory| factory.accepts(field))
    }

    /// Category the field resolves to under this registry.
    ///
    /// Unlike [`classify`](crate::classify::classify) this honours runtime
    /// checks such as converter availability, so it is `None` exactly when
    /// [`resolve`](Self::resolve) fails.
    #[must_use]
    pub fn category_for(&self, field: &FieldDescriptor) -> Option<AccessorCategory> {
        self.factory_for(field).map(AccessorFactory::category)
    }

    /// Whether any factory accepts the field.
    #[must_use]
    pub fn accepts(&self, field: &FieldDescriptor) -> bool {
        self.factory_for(field).is_some()
    }

    pub fn resolve(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Arc<dyn FieldAccessor>, UnmappableFieldError> {
        let Some(factory) = self.factory_for(field) else {
            self.trace.emit(|| ResolutionTraceEvent::Unmappable {
                field: field.field_ref(),
            });

            return Err(field.field_ref().into());
        };

        self.trace.emit(|| ResolutionTraceEvent::AccessorResolved {
            field: field.field_ref(),
            factory: factory.name(),
            category: factory.category(),
        });

        Ok(factory.construct(field))
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

impl fmt::Debug for AccessorFactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorFactoryRegistry")
            .field("factories", &self.factory_names())
            .field("trace", &self.trace)
            .finish()
    }
}
