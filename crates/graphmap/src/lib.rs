//! ## Crate layout
//! - `core`: field descriptors, classification, registries, the resolution
//!   facade, the graph storage boundary, and the built-in strategies.
//! - `config`: TOML mapping configuration.
//! - `error`: public error taxonomy over every layer.
//!
//! [`MappingBuilder`] is the usual entry point: it turns a `MappingConfig`
//! into a ready [`ResolutionFacade`](graphmap_core::resolve::ResolutionFacade).

pub use graphmap_config as config;
pub use graphmap_core as core;

mod builder;
pub mod error;


pub use builder::MappingBuilder;
pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, MappingBuilder, config::MappingConfig};
    pub use graphmap_core::prelude::*;
    pub use graphmap_core::{
        accessor::FieldAccessor,
        listener::FieldListener,
        resolve::{FieldBinding, TypeBindings},
        store::GraphStore,
    };
}
