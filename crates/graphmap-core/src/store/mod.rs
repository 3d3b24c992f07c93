//! Storage boundary consumed by accessor strategies and listeners.
//!
//! The mapping layer never talks to a graph engine directly. Every read or
//! write goes through [`GraphStore`], a deliberately narrow surface:
//! named properties on nodes and relationships, typed relationships between
//! nodes, and a key/value index.

pub mod memory;


use crate::{
    error::StoreError,
    model::Direction,
    value::{ElementRef, NodeId, RelationshipId, Value},
};

pub use memory::MemoryGraph;

///
/// RelationshipRecord
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RelationshipRecord {
    pub id: RelationshipId,
    pub start: NodeId,
    pub end: NodeId,
}

impl RelationshipRecord {
    /// The node at the far end when traversing from `node`.
    #[must_use]
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }
}

///
/// GraphStore
///

pub trait GraphStore {
    fn property(&self, element: ElementRef, key: &str) -> Result<Option<Value>, StoreError>;

    fn set_property(
        &mut self,
        element: ElementRef,
        key: &str,
        value: Value,
    ) -> Result<(), StoreError>;

    fn remove_property(
        &mut self,
        element: ElementRef,
        key: &str,
    ) -> Result<Option<Value>, StoreError>;

    /// Relationships of `rel_type` touching `node` in `direction`, in
    /// creation order.
    fn relationships(
        &self,
        node: NodeId,
        rel_type: &str,
        direction: Direction,
    ) -> Result<Vec<RelationshipRecord>, StoreError>;

    fn create_relationship(
        &mut self,
        start: NodeId,
        end: NodeId,
        rel_type: &str,
    ) -> Result<RelationshipId, StoreError>;

    fn delete_relationship(&mut self, id: RelationshipId) -> Result<(), StoreError>;

    fn index_add(
        &mut self,
        index: &str,
        key: &str,
        value: &Value,
        element: ElementRef,
    ) -> Result<(), StoreError>;

    fn index_remove(
        &mut self,
        index: &str,
        key: &str,
        value: &Value,
        element: ElementRef,
    ) -> Result<(), StoreError>;
}
