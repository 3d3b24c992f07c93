//! Resolution facade.
//!
//! Entry point called by the interception layer. It excludes synthetic
//! fields, delegates to the accessor and listener registries, and caches
//! nothing itself; callers that want a per-type cache use [`TypeBindings`].

mod binding;


pub use binding::{FieldBinding, TypeBindings};

use crate::{
    accessor::FieldAccessor,
    classify::{self, AccessorCategory, SYNTHETIC_FIELD_PREFIX},
    convert::ConversionService,
    error::UnmappableFieldError,
    listener::{DEFAULT_INDEX_NAME, FieldListener},
    model::FieldDescriptor,
    naming,
    obs::trace::{ResolutionTraceEvent, ResolutionTraceSink, TraceHandle},
    registry::{AccessorFactoryRegistry, ListenerFactoryRegistry},
};
use std::sync::Arc;

///
/// ResolutionFacade
///
/// Read-only after construction and shared across threads. Resolution is
/// deterministic: the same descriptor always yields the same strategy and
/// the same ordered listeners.
///

#[derive(Clone, Debug)]
pub struct ResolutionFacade {
    accessors: AccessorFactoryRegistry,
    listeners: ListenerFactoryRegistry,
    synthetic_prefix: String,
    trace: TraceHandle,
}

impl ResolutionFacade {
    #[must_use]
    pub fn new(accessors: AccessorFactoryRegistry, listeners: ListenerFactoryRegistry) -> Self {
        Self {
            accessors,
            listeners,
            synthetic_prefix: SYNTHETIC_FIELD_PREFIX.to_string(),
            trace: TraceHandle::disabled(),
        }
    }

    /// Built-in accessor catalogue plus the default indexing listener.
    #[must_use]
    pub fn standard(conversions: Arc<ConversionService>) -> Self {
        Self::new(
            AccessorFactoryRegistry::standard(conversions),
            ListenerFactoryRegistry::standard(DEFAULT_INDEX_NAME),
        )
    }

    #[must_use]
    pub fn with_synthetic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.synthetic_prefix = prefix.into();
        self
    }

    /// Attach a trace sink to the facade and both registries.
    #[must_use]
    pub fn with_trace(self, sink: Arc<dyn ResolutionTraceSink>) -> Self {
        let trace = TraceHandle::new(sink);

        Self {
            accessors: self.accessors.with_trace(trace.clone()),
            listeners: self.listeners.with_trace(trace.clone()),
            synthetic_prefix: self.synthetic_prefix,
            trace,
        }
    }

    #[must_use]
    pub fn synthetic_prefix(&self) -> &str {
        &self.synthetic_prefix
    }

    #[must_use]
    pub const fn accessors(&self) -> &AccessorFactoryRegistry {
        &self.accessors
    }

    #[must_use]
    pub const fn listeners(&self) -> &ListenerFactoryRegistry {
        &self.listeners
    }

    #[must_use]
    pub fn is_synthetic(&self, field: &FieldDescriptor) -> bool {
        classify::is_synthetic_field(field, &self.synthetic_prefix)
    }

    /// Accessor strategy for one field.
    ///
    /// Synthetic fields resolve to `Ok(None)` before any classifier runs.
    /// Every other field resolves to exactly one strategy or fails.
    pub fn accessor_for(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<Arc<dyn FieldAccessor>>, UnmappableFieldError> {
        if self.is_synthetic(field) {
            self.trace
                .emit(|| ResolutionTraceEvent::SyntheticFieldSkipped {
                    field: field.field_ref(),
                });

            return Ok(None);
        }

        self.accessors.resolve(field).map(Some)
    }

    /// Listeners to notify after a committed write, in registration order.
    #[must_use]
    pub fn listeners_for(&self, field: &FieldDescriptor) -> Vec<Arc<dyn FieldListener>> {
        if self.is_synthetic(field) {
            return Vec::new();
        }

        self.listeners.resolve(field)
    }

    /// Whether the field is handled by one of the relationship strategies.
    #[must_use]
    pub fn is_relationship_field(&self, field: &FieldDescriptor) -> bool {
        classify::is_relationship_field(field)
    }

    /// Category `accessor_for` would resolve the field to; `None` when the
    /// field is synthetic or unmappable. Emits no trace events.
    #[must_use]
    pub fn category_for(&self, field: &FieldDescriptor) -> Option<AccessorCategory> {
        if self.is_synthetic(field) {
            return None;
        }

        self.accessors.category_for(field)
    }

    /// Accessor and listeners for one field, or `None` when synthetic.
    pub fn bind(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<FieldBinding>, UnmappableFieldError> {
        let Some(accessor) = self.accessor_for(field)? else {
            return Ok(None);
        };

        Ok(Some(FieldBinding::new(
            naming::key_for(field),
            accessor,
            self.listeners.resolve(field),
        )))
    }

    /// Bind every field of one owning type. The first unmappable field
    /// halts the whole type.
    pub fn bind_type<'a, I>(&self, fields: I) -> Result<TypeBindings, UnmappableFieldError>
    where
        I: IntoIterator<Item = &'a FieldDescriptor>,
    {
        let mut bindings = TypeBindings::default();

        for field in fields {
            if let Some(binding) = self.bind(field)? {
                bindings.insert(field.name.clone(), binding);
            }
        }

        Ok(bindings)
    }
}
