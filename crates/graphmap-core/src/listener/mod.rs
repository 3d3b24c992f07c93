//! Post-write side-effect listeners.
//!
//! Listeners are additive: every matching listener runs after a committed
//! write, in registration order. A listener never changes the stored value.

mod indexing;


pub use indexing::{DEFAULT_INDEX_NAME, IndexingListener, IndexingListenerFactory};

use crate::{
    error::AccessError,
    model::FieldRef,
    store::GraphStore,
    value::{ElementRef, Value},
};
use std::fmt;

///
/// FieldListener
///

pub trait FieldListener: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn field(&self) -> &FieldRef;

    /// React to a committed write of `new`; `old` is the value read back
    /// before the write, when the accessor is store-backed.
    fn value_changed(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        old: Option<&Value>,
        new: &Value,
    ) -> Result<(), AccessError>;
}
