use crate::error::Error;
use graphmap_config::MappingConfig;
use graphmap_core::{
    convert::ConversionService,
    listener::IndexingListenerFactory,
    obs::trace::ResolutionTraceSink,
    registry::{AccessorFactoryRegistry, ListenerFactory, ListenerFactoryRegistry},
    resolve::ResolutionFacade,
};
use std::{path::Path, sync::Arc};

///
/// MappingBuilder
///
/// Turns a [`MappingConfig`] plus caller-supplied collaborators into a ready
/// [`ResolutionFacade`]. Built-in listeners come first, then any extra
/// listener factories in the order they were added.
///

#[derive(Default)]
pub struct MappingBuilder {
    config: MappingConfig,
    conversions: Arc<ConversionService>,
    accessors: Option<AccessorFactoryRegistry>,
    extra_listeners: Vec<Arc<dyn ListenerFactory>>,
    trace: Option<Arc<dyn ResolutionTraceSink>>,
}

impl MappingBuilder {
    #[must_use]
    pub fn new(config: MappingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        Ok(Self::new(MappingConfig::from_toml_str(source)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self::new(MappingConfig::from_path(path)?))
    }

    #[must_use]
    pub fn conversions(mut self, conversions: Arc<ConversionService>) -> Self {
        self.conversions = conversions;
        self
    }

    /// Replace the built-in accessor catalogue with an explicit ordered list.
    #[must_use]
    pub fn accessors(mut self, accessors: AccessorFactoryRegistry) -> Self {
        self.accessors = Some(accessors);
        self
    }

    #[must_use]
    pub fn listener(mut self, factory: Arc<dyn ListenerFactory>) -> Self {
        self.extra_listeners.push(factory);
        self
    }

    #[must_use]
    pub fn trace(mut self, sink: Arc<dyn ResolutionTraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn build(self) -> Result<ResolutionFacade, Error> {
        self.config.validate()?;

        let accessors = self
            .accessors
            .unwrap_or_else(|| AccessorFactoryRegistry::standard(self.conversions));

        let mut listeners: Vec<Arc<dyn ListenerFactory>> = Vec::new();
        if self.config.listeners.indexing {
            listeners.push(Arc::new(IndexingListenerFactory::new(
                self.config.listeners.index_name,
            )));
        }
        listeners.extend(self.extra_listeners);

        let facade = ResolutionFacade::new(accessors, ListenerFactoryRegistry::new(listeners))
            .with_synthetic_prefix(self.config.synthetic_field_prefix);

        Ok(match self.trace {
            Some(sink) => facade.with_trace(sink),
            None => facade,
        })
    }
}
