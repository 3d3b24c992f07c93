use crate::{
    error::StoreError,
    model::Direction,
    store::{GraphStore, RelationshipRecord},
    value::{ElementRef, NodeId, RelationshipId, Value},
};
use std::collections::BTreeMap;

type Properties = BTreeMap<String, Value>;

///
/// StoredRelationship
///

#[derive(Clone, Debug)]
struct StoredRelationship {
    record: RelationshipRecord,
    rel_type: String,
    properties: Properties,
}

///
/// IndexEntry
///

#[derive(Clone, Debug, PartialEq)]
struct IndexEntry {
    index: String,
    key: String,
    value: Value,
    element: ElementRef,
}

///
/// MemoryGraph
///
/// Process-local `GraphStore` backed by ordered maps. Ids are allocated from
/// one counter shared by nodes and relationships, so iteration order is
/// creation order.
///

#[derive(Debug, Default)]
pub struct MemoryGraph {
    next_id: u64,
    nodes: BTreeMap<NodeId, Properties>,
    relationships: BTreeMap<RelationshipId, StoredRelationship>,
    index: Vec<IndexEntry>,
}

impl MemoryGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_node(&mut self) -> NodeId {
        let id = NodeId(self.allocate());
        self.nodes.insert(id, Properties::new());

        id
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Elements indexed under `(index, key, value)`, in insertion order.
    #[must_use]
    pub fn index_lookup(&self, index: &str, key: &str, value: &Value) -> Vec<ElementRef> {
        self.index
            .iter()
            .filter(|e| e.index == index && e.key == key && &e.value == value)
            .map(|e| e.element)
            .collect()
    }

    const fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn properties(&self, element: ElementRef) -> Result<&Properties, StoreError> {
        let props = match element {
            ElementRef::Node(id) => self.nodes.get(&id),
            ElementRef::Relationship(id) => self.relationships.get(&id).map(|r| &r.properties),
        };

        props.ok_or_else(|| not_found(element))
    }

    fn properties_mut(&mut self, element: ElementRef) -> Result<&mut Properties, StoreError> {
        let props = match element {
            ElementRef::Node(id) => self.nodes.get_mut(&id),
            ElementRef::Relationship(id) => self
                .relationships
                .get_mut(&id)
                .map(|r| &mut r.properties),
        };

        props.ok_or_else(|| not_found(element))
    }

    fn require_node(&self, id: NodeId) -> Result<(), StoreError> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(not_found(ElementRef::Node(id)))
        }
    }
}

impl GraphStore for MemoryGraph {
    fn property(&self, element: ElementRef, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.properties(element)?.get(key).cloned())
    }

    fn set_property(
        &mut self,
        element: ElementRef,
        key: &str,
        value: Value,
    ) -> Result<(), StoreError> {
        self.properties_mut(element)?.insert(key.to_string(), value);

        Ok(())
    }

    fn remove_property(
        &mut self,
        element: ElementRef,
        key: &str,
    ) -> Result<Option<Value>, StoreError> {
        Ok(self.properties_mut(element)?.remove(key))
    }

    fn relationships(
        &self,
        node: NodeId,
        rel_type: &str,
        direction: Direction,
    ) -> Result<Vec<RelationshipRecord>, StoreError> {
        self.require_node(node)?;

        let matches = self
            .relationships
            .values()
            .filter(|r| r.rel_type == rel_type)
            .filter(|r| match direction {
                Direction::Outgoing => r.record.start == node,
                Direction::Incoming => r.record.end == node,
                Direction::Both => r.record.start == node || r.record.end == node,
            })
            .map(|r| r.record)
            .collect();

        Ok(matches)
    }

    fn create_relationship(
        &mut self,
        start: NodeId,
        end: NodeId,
        rel_type: &str,
    ) -> Result<RelationshipId, StoreError> {
        self.require_node(start)?;
        self.require_node(end)?;

        let id = RelationshipId(self.allocate());
        self.relationships.insert(
            id,
            StoredRelationship {
                record: RelationshipRecord { id, start, end },
                rel_type: rel_type.to_string(),
                properties: Properties::new(),
            },
        );

        Ok(id)
    }

    fn delete_relationship(&mut self, id: RelationshipId) -> Result<(), StoreError> {
        self.relationships
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(ElementRef::Relationship(id)))
    }

    fn index_add(
        &mut self,
        index: &str,
        key: &str,
        value: &Value,
        element: ElementRef,
    ) -> Result<(), StoreError> {
        let entry = IndexEntry {
            index: index.to_string(),
            key: key.to_string(),
            value: value.clone(),
            element,
        };
        if !self.index.contains(&entry) {
            self.index.push(entry);
        }

        Ok(())
    }

    fn index_remove(
        &mut self,
        index: &str,
        key: &str,
        value: &Value,
        element: ElementRef,
    ) -> Result<(), StoreError> {
        self.index.retain(|e| {
            !(e.index == index && e.key == key && &e.value == value && e.element == element)
        });

        Ok(())
    }
}

fn not_found(element: ElementRef) -> StoreError {
    StoreError::NotFound {
        element: element.to_string(),
    }
}
