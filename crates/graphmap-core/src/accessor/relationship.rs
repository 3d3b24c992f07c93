use crate::{
    accessor::{FieldAccessor, expect_variant},
    classify::AccessorCategory,
    error::AccessError,
    model::{Direction, FieldDescriptor, FieldRef},
    store::{GraphStore, RelationshipRecord},
    value::{ElementRef, NodeId, Value},
};
use std::sync::Arc;

///
/// RelationshipEnd
/// Relationship type and traversal direction for one relationship field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
struct RelationshipEnd {
    field: FieldRef,
    rel_type: String,
    direction: Direction,
}

impl RelationshipEnd {
    fn new(field: &FieldDescriptor) -> Self {
        let (rel_type, direction) = field.relationship_end();

        Self {
            field: field.field_ref(),
            rel_type: rel_type.to_string(),
            direction,
        }
    }

    // Relationship fields only exist on node-backed owners.
    fn node(&self, owner: ElementRef) -> Result<NodeId, AccessError> {
        owner.as_node().ok_or_else(|| AccessError::NotNodeBacked {
            field: self.field.clone(),
            owner: owner.to_string(),
        })
    }

    fn records(
        &self,
        store: &dyn GraphStore,
        node: NodeId,
    ) -> Result<Vec<RelationshipRecord>, AccessError> {
        Ok(store.relationships(node, &self.rel_type, self.direction)?)
    }

    fn related_nodes(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Vec<NodeId>, AccessError> {
        let node = self.node(owner)?;
        let records = self.records(store, node)?;

        Ok(records.iter().map(|r| r.other(node)).collect())
    }

    // Incoming fields are connected target -> owner; the rest owner -> target.
    fn connect(
        &self,
        store: &mut dyn GraphStore,
        node: NodeId,
        target: NodeId,
    ) -> Result<(), AccessError> {
        let (start, end) = match self.direction {
            Direction::Incoming => (target, node),
            Direction::Outgoing | Direction::Both => (node, target),
        };
        store.create_relationship(start, end, &self.rel_type)?;

        Ok(())
    }

    // Make the set of related nodes equal `targets`, keeping existing
    // relationships that already point at a wanted node.
    fn replace(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        targets: &[NodeId],
    ) -> Result<(), AccessError> {
        let node = self.node(owner)?;
        let mut kept = Vec::with_capacity(targets.len());

        for record in self.records(store, node)? {
            let other = record.other(node);
            if targets.contains(&other) && !kept.contains(&other) {
                kept.push(other);
            } else {
                store.delete_relationship(record.id)?;
            }
        }

        for &target in targets {
            if !kept.contains(&target) {
                self.connect(store, node, target)?;
                kept.push(target);
            }
        }

        Ok(())
    }

    fn read_only(&self) -> AccessError {
        AccessError::ReadOnly {
            field: self.field.clone(),
        }
    }
}

///
/// SingleRelationshipAccessor
/// Field whose declared type is itself a mapped entity.
///

#[derive(Debug)]
pub struct SingleRelationshipAccessor {
    end: RelationshipEnd,
}

impl SingleRelationshipAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            end: RelationshipEnd::new(field),
        })
    }
}

impl FieldAccessor for SingleRelationshipAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::SingleRelationship
    }

    fn field(&self) -> &FieldRef {
        &self.end.field
    }

    fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        let nodes = self.end.related_nodes(store, owner)?;

        match nodes.as_slice() {
            [] => Ok(Some(Value::Null)),
            [node] => Ok(Some(Value::Node(*node))),
            _ => Err(AccessError::Cardinality {
                field: self.end.field.clone(),
                found: nodes.len(),
            }),
        }
    }

    fn write(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        value: &Value,
    ) -> Result<(), AccessError> {
        match value {
            Value::Null => self.end.replace(store, owner, &[]),
            Value::Node(target) => self.end.replace(store, owner, &[*target]),
            other => expect_variant(&self.end.field, "Node", other, false),
        }
    }
}

///
/// CollectionRelationshipAccessor
/// Writable container of related entities.
///

#[derive(Debug)]
pub struct CollectionRelationshipAccessor {
    end: RelationshipEnd,
}

impl CollectionRelationshipAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            end: RelationshipEnd::new(field),
        })
    }
}

impl FieldAccessor for CollectionRelationshipAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::CollectionRelationship
    }

    fn field(&self) -> &FieldRef {
        &self.end.field
    }

    fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        Ok(Some(Value::Nodes(self.end.related_nodes(store, owner)?)))
    }

    fn write(
        &self,
        store: &mut dyn GraphStore,
        owner: ElementRef,
        value: &Value,
    ) -> Result<(), AccessError> {
        match value {
            Value::Null => self.end.replace(store, owner, &[]),
            Value::Nodes(targets) => self.end.replace(store, owner, targets),
            other => expect_variant(&self.end.field, "Nodes", other, false),
        }
    }
}

///
/// ReadOnlyCollectionRelationshipAccessor
/// Iterable view over related entities; writes are rejected.
///

#[derive(Debug)]
pub struct ReadOnlyCollectionRelationshipAccessor {
    end: RelationshipEnd,
}

impl ReadOnlyCollectionRelationshipAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            end: RelationshipEnd::new(field),
        })
    }
}

impl FieldAccessor for ReadOnlyCollectionRelationshipAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::ReadOnlyCollectionRelationship
    }

    fn field(&self) -> &FieldRef {
        &self.end.field
    }

    fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        Ok(Some(Value::Nodes(self.end.related_nodes(store, owner)?)))
    }

    fn write(
        &self,
        _store: &mut dyn GraphStore,
        _owner: ElementRef,
        _value: &Value,
    ) -> Result<(), AccessError> {
        Err(self.end.read_only())
    }

    fn is_writable(&self) -> bool {
        false
    }
}

///
/// RelationshipEntityCollectionAccessor
/// Iterable view over relationship entities; writes are rejected.
///

#[derive(Debug)]
pub struct RelationshipEntityCollectionAccessor {
    end: RelationshipEnd,
}

impl RelationshipEntityCollectionAccessor {
    pub(crate) fn build(field: &FieldDescriptor) -> Arc<dyn FieldAccessor> {
        Arc::new(Self {
            end: RelationshipEnd::new(field),
        })
    }
}

impl FieldAccessor for RelationshipEntityCollectionAccessor {
    fn category(&self) -> AccessorCategory {
        AccessorCategory::RelationshipEntityCollection
    }

    fn field(&self) -> &FieldRef {
        &self.end.field
    }

    fn read(
        &self,
        store: &dyn GraphStore,
        owner: ElementRef,
    ) -> Result<Option<Value>, AccessError> {
        let node = self.end.node(owner)?;
        let ids = self
            .end
            .records(store, node)?
            .into_iter()
            .map(|r| r.id)
            .collect();

        Ok(Some(Value::Relationships(ids)))
    }

    fn write(
        &self,
        _store: &mut dyn GraphStore,
        _owner: ElementRef,
        _value: &Value,
    ) -> Result<(), AccessError> {
        Err(self.end.read_only())
    }

    fn is_writable(&self) -> bool {
        false
    }
}
