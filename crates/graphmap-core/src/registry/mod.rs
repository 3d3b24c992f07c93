//! Factory registries.
//!
//! Two independent ordered lists built once at startup:
//! - accessor factories resolve first-match, exactly one strategy per field;
//! - listener factories resolve every match, zero or more listeners per field.
//!
//! Both are read-only after construction and safe to share across threads.

mod accessor;
mod listener;


pub use accessor::{AccessorFactory, AccessorFactoryRegistry};
pub use listener::{ListenerFactory, ListenerFactoryRegistry};
