//! Resolution tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! resolution semantics.

use crate::{classify::AccessorCategory, model::FieldRef};
use std::sync::{Arc, Mutex, PoisonError};

///
/// ResolutionTraceSink
///

pub trait ResolutionTraceSink: Send + Sync {
    fn on_event(&self, event: ResolutionTraceEvent);
}

///
/// ResolutionTraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolutionTraceEvent {
    AccessorResolved {
        field: FieldRef,
        factory: &'static str,
        category: AccessorCategory,
    },
    ListenersResolved {
        field: FieldRef,
        listeners: Vec<&'static str>,
    },
    SyntheticFieldSkipped {
        field: FieldRef,
    },
    Unmappable {
        field: FieldRef,
    },
}

impl ResolutionTraceEvent {
    #[must_use]
    pub const fn field(&self) -> &FieldRef {
        match self {
            Self::AccessorResolved { field, .. }
            | Self::ListenersResolved { field, .. }
            | Self::SyntheticFieldSkipped { field }
            | Self::Unmappable { field } => field,
        }
    }
}

///
/// TraceHandle
/// Optional shared sink held by registries and the facade.
///

#[derive(Clone, Default)]
pub struct TraceHandle(Option<Arc<dyn ResolutionTraceSink>>);

impl TraceHandle {
    #[must_use]
    pub fn new(sink: Arc<dyn ResolutionTraceSink>) -> Self {
        Self(Some(sink))
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.0.is_some()
    }

    pub fn emit(&self, event: impl FnOnce() -> ResolutionTraceEvent) {
        if let Some(sink) = &self.0 {
            sink.on_event(event());
        }
    }
}

impl std::fmt::Debug for TraceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TraceHandle")
            .field(&self.is_enabled())
            .finish()
    }
}

///
/// RecordingTraceSink
/// In-memory sink that keeps every event in arrival order.
///

#[derive(Debug, Default)]
pub struct RecordingTraceSink {
    events: Mutex<Vec<ResolutionTraceEvent>>,
}

impl RecordingTraceSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<ResolutionTraceEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn take(&self) -> Vec<ResolutionTraceEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl ResolutionTraceSink for RecordingTraceSink {
    fn on_event(&self, event: ResolutionTraceEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
