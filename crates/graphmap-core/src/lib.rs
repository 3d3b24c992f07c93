//! Core runtime for graphmap: field descriptors, accessor classification,
//! factory registries, the resolution facade, the graph storage boundary,
//! and the built-in accessor strategies and listeners.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod accessor;
pub mod classify;
pub mod convert;
pub mod error;
pub mod listener;
pub mod model;
pub mod naming;
pub mod obs;
pub mod registry;
pub mod resolve;
pub mod store;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the resolution entry point.
/// No strategies, stores, or trace sinks are re-exported here.
///

pub mod prelude {
    pub use crate::{
        classify::AccessorCategory,
        model::{
            Annotations, DeclaredType, Direction, ElementClass, EntityMapping, FieldDescriptor,
            RelatedTo, RelatedToVia, RelationshipMapping, ScalarKind, TypeModel,
        },
        resolve::ResolutionFacade,
        value::{ElementRef, NodeId, RelationshipId, Value},
    };
}
